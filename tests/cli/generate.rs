use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{
    CliTest,
    class_builder::{ACC_FINAL, ACC_STATIC, ClassBuilder, MARKER, Usage, Value},
    run,
};

const CONSTANT: u16 = ACC_STATIC | ACC_FINAL;

fn foo_class() -> Vec<u8> {
    ClassBuilder::class("com/example/Foo")
        .text_field("HELLO", CONSTANT, "Hello", &[MARKER])
        .text_field("PLAIN", CONSTANT, "not marked", &[])
        .build()
}

fn anno_class() -> Vec<u8> {
    ClassBuilder::annotation("com/example/MyAnno")
        .method("tags", &[MARKER])
        .method("id", &[])
        .build()
}

fn screen_class() -> Vec<u8> {
    ClassBuilder::class("com/example/Screen")
        .usage(
            Usage::new("Lcom/example/MyAnno;")
                .arg("tags", Value::Texts(vec!["a", "b", "c"]))
                .arg("id", Value::Int(4)),
        )
        .build()
}

/// Entries of a key file as `(index, comment, literal)`.
fn entries(test: &CliTest, path: &str) -> Result<Vec<(usize, String, String)>> {
    Ok(test
        .read_key_file(path)?
        .entries
        .into_iter()
        .map(|e| (e.index, e.comment, e.literal))
        .collect())
}

#[test]
fn test_generate_field_literal() -> Result<()> {
    let test = CliTest::with_jar(
        "plugin.jar",
        &[
            ("META-INF/", Vec::new()),
            ("META-INF/MANIFEST.MF", b"Manifest-Version: 1.0\n".to_vec()),
            ("com/example/Foo.class", foo_class()),
        ],
    )?;

    let (code, stdout, stderr) = run(test.generate_command("plugin.jar", "1.0"))?;

    assert_eq!(code, 0, "stderr: {stderr}");
    assert_eq!(
        stdout,
        "Scanned 1 class in plugin.jar\n\
         1 literal found.\n\
         \u{2713} Wrote 1 key to lang.keys.txt (version 1.0)\n"
    );

    let key_file = test.read_key_file("lang.keys.txt")?;
    assert_eq!(key_file.version, "1.0");
    assert_eq!(
        entries(&test, "lang.keys.txt")?,
        vec![(0, "FIELD: HELLO com.example.Foo".to_string(), "Hello".to_string())]
    );

    let bytes = std::fs::read(test.root().join("lang.keys.txt"))?;
    assert_eq!(&bytes[..2], &[0xFE, 0xFF]);

    Ok(())
}

#[test]
fn test_generate_annotation_array_arguments() -> Result<()> {
    let test = CliTest::with_jar(
        "plugin.jar",
        &[
            ("com/example/MyAnno.class", anno_class()),
            ("com/example/Screen.class", screen_class()),
        ],
    )?;

    let (code, _, stderr) = run(test.generate_command("plugin.jar", "2"))?;
    assert_eq!(code, 0, "stderr: {stderr}");

    let comment = |pos: usize| {
        format!("ANNOTATION METHOD: tags[{pos}|3] com.example.Screen Lcom.example.MyAnno;")
    };
    assert_eq!(
        entries(&test, "lang.keys.txt")?,
        vec![
            (0, comment(1), "a".to_string()),
            (1, comment(2), "b".to_string()),
            (2, comment(3), "c".to_string()),
        ]
    );

    Ok(())
}

#[test]
fn test_generate_annotation_declared_after_usage() -> Result<()> {
    let test = CliTest::with_jar(
        "plugin.jar",
        &[
            ("com/example/Screen.class", screen_class()),
            ("com/example/MyAnno.class", anno_class()),
        ],
    )?;

    let (code, _, stderr) = run(test.generate_command("plugin.jar", "2"))?;
    assert_eq!(code, 0, "stderr: {stderr}");

    let literals: Vec<String> = entries(&test, "lang.keys.txt")?
        .into_iter()
        .map(|(_, _, literal)| literal)
        .collect();
    assert_eq!(literals, vec!["a", "b", "c"]);

    Ok(())
}

#[test]
fn test_generate_skips_duplicates() -> Result<()> {
    let bar = ClassBuilder::class("com/example/Bar")
        .text_field("AGAIN", CONSTANT, "Hello", &[MARKER])
        .text_field("WORLD", CONSTANT, "World", &[MARKER])
        .build();
    let test = CliTest::with_jar(
        "plugin.jar",
        &[
            ("com/example/Foo.class", foo_class()),
            ("com/example/Bar.class", bar),
        ],
    )?;

    let (code, stdout, _) = run(test.generate_command("plugin.jar", "1"))?;

    assert_eq!(code, 0);
    assert!(stdout.contains(
        "[DUPLICATE DETECTED] [SKIPPED]\n    added: FIELD: HELLO com.example.Foo\n    duplicate: FIELD: AGAIN com.example.Bar\n"
    ));
    assert!(stdout.contains("3 literals found (1 duplicate skipped).\n"));
    assert_eq!(
        entries(&test, "lang.keys.txt")?,
        vec![
            (0, "FIELD: HELLO com.example.Foo".to_string(), "Hello".to_string()),
            (1, "FIELD: WORLD com.example.Bar".to_string(), "World".to_string()),
        ]
    );

    Ok(())
}

#[test]
fn test_generate_nothing_found() -> Result<()> {
    let plain = ClassBuilder::class("com/example/Plain")
        .text_field("TEXT", CONSTANT, "text", &[])
        .build();
    let test = CliTest::with_jar("plugin.jar", &[("com/example/Plain.class", plain)])?;

    let (code, stdout, _) = run(test.generate_command("plugin.jar", "1"))?;

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "Scanned 1 class in plugin.jar\nNo localizable string literals found.\n"
    );
    assert!(!test.root().join("lang.keys.txt").exists());

    Ok(())
}

#[test]
fn test_generate_nothing_found_keeps_existing_output() -> Result<()> {
    let plain = ClassBuilder::class("com/example/Plain")
        .text_field("TEXT", CONSTANT, "text", &[])
        .build();
    let test = CliTest::with_jar("plugin.jar", &[("com/example/Plain.class", plain)])?;
    let previous = b"\xFE\xFF\x00v\x00e\x00r".to_vec();
    test.write_file("lang.keys.txt", &previous)?;

    let (code, stdout, _) = run(test.generate_command("plugin.jar", "2"))?;

    assert_eq!(code, 0);
    assert!(stdout.ends_with("No localizable string literals found.\n"));
    assert_eq!(std::fs::read(test.root().join("lang.keys.txt"))?, previous);

    Ok(())
}

#[test]
fn test_generate_skips_classes_with_unpaired_surrogates() -> Result<()> {
    let lone = |name: &str, surrogate: u16| {
        ClassBuilder::class(name)
            .utf16_field("BROKEN", &[u16::from(b'a'), surrogate], &[MARKER])
            .build()
    };
    let test = CliTest::with_jar(
        "plugin.jar",
        &[
            ("com/example/A.class", lone("com/example/A", 0xD800)),
            ("com/example/B.class", lone("com/example/B", 0xD801)),
            ("com/example/Foo.class", foo_class()),
        ],
    )?;

    let (code, stdout, _) = run(test.generate_command("plugin.jar", "1"))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("[SKIPPED] Could not decode com/example/A.class"));
    assert!(stdout.contains("[SKIPPED] Could not decode com/example/B.class"));
    assert!(!stdout.contains("[DUPLICATE DETECTED]"));
    assert_eq!(
        entries(&test, "lang.keys.txt")?,
        vec![(0, "FIELD: HELLO com.example.Foo".to_string(), "Hello".to_string())]
    );

    Ok(())
}

#[test]
fn test_generate_reports_ignored_fields() -> Result<()> {
    let class = ClassBuilder::class("com/example/Foo")
        .text_field("HELLO", CONSTANT, "Hello", &[MARKER])
        .text_field("MUTABLE", ACC_STATIC, "changes", &[MARKER])
        .int_field("COUNT", 3, &[MARKER])
        .build();
    let test = CliTest::with_jar("plugin.jar", &[("com/example/Foo.class", class)])?;

    let (code, stdout, _) = run(test.generate_command("plugin.jar", "1"))?;

    assert_eq!(code, 0);
    assert!(stdout.contains(
        "[IGNORED] Localizable field found but isn't final: FIELD: MUTABLE com.example.Foo\n"
    ));
    assert!(stdout.contains(
        "[IGNORED] Localizable field found but did not contain a String value: FIELD: COUNT com.example.Foo\n"
    ));
    assert_eq!(entries(&test, "lang.keys.txt")?.len(), 1);

    Ok(())
}

#[test]
fn test_generate_verbose_lists_discoveries() -> Result<()> {
    let test = CliTest::with_jar("plugin.jar", &[("com/example/Foo.class", foo_class())])?;

    let (_, quiet, _) = run(test.generate_command("plugin.jar", "1"))?;
    let mut cmd = test.generate_command("plugin.jar", "1");
    cmd.args(["--force", "-v"]);
    let (code, verbose, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(!quiet.contains("Localizable field found: FIELD: HELLO com.example.Foo"));
    assert!(verbose.contains("Localizable field found: FIELD: HELLO com.example.Foo\n"));

    Ok(())
}

#[test]
fn test_generate_missing_jar() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, stderr) = run(test.generate_command("missing.jar", "1"))?;

    assert_eq!(code, 2);
    assert_eq!(stdout, "");
    assert!(stderr.contains("File not found: missing.jar"), "stderr: {stderr}");

    Ok(())
}

#[test]
fn test_generate_rejects_non_jar() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("plugin.zip", class_builder_jar())?;

    let (code, _, stderr) = run(test.generate_command("plugin.zip", "1"))?;

    assert_eq!(code, 2);
    assert!(stderr.contains("jar file expected: plugin.zip"), "stderr: {stderr}");

    Ok(())
}

fn class_builder_jar() -> Vec<u8> {
    crate::class_builder::jar(&[("com/example/Foo.class", foo_class())])
}

#[test]
fn test_generate_corrupt_archive() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("plugin.jar", "this is not a zip file")?;

    let (code, _, stderr) = run(test.generate_command("plugin.jar", "1"))?;

    assert_eq!(code, 2);
    assert!(stderr.contains("Failed to read archive"), "stderr: {stderr}");

    Ok(())
}

#[test]
fn test_generate_skips_undecodable_class() -> Result<()> {
    let test = CliTest::with_jar(
        "plugin.jar",
        &[
            ("com/example/Broken.class", b"\xCA\xFE".to_vec()),
            ("com/example/Foo.class", foo_class()),
        ],
    )?;

    let (code, stdout, _) = run(test.generate_command("plugin.jar", "1"))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("[SKIPPED] Could not decode com/example/Broken.class"));
    assert_eq!(entries(&test, "lang.keys.txt")?.len(), 1);

    Ok(())
}

#[test]
fn test_generate_dry_run() -> Result<()> {
    let test = CliTest::with_jar("plugin.jar", &[("com/example/Foo.class", foo_class())])?;

    let mut cmd = test.generate_command("plugin.jar", "1");
    cmd.arg("--dry-run");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.ends_with("Dry run: 1 key would be written to lang.keys.txt (version 1)\n"));
    assert!(!test.root().join("lang.keys.txt").exists());

    Ok(())
}

#[test]
fn test_generate_custom_output() -> Result<()> {
    let test = CliTest::with_jar("plugin.jar", &[("com/example/Foo.class", foo_class())])?;

    let mut cmd = test.generate_command("plugin.jar", "3.1");
    cmd.args(["-o", "lang/keys.txt"]);
    let (code, stdout, stderr) = run(cmd)?;

    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(stdout.contains("Wrote 1 key to lang/keys.txt (version 3.1)"));
    assert_eq!(test.read_key_file("lang/keys.txt")?.version, "3.1");
    assert!(!test.root().join("lang.keys.txt").exists());

    Ok(())
}

#[test]
fn test_generate_overwrites_without_terminal() -> Result<()> {
    let test = CliTest::with_jar("plugin.jar", &[("com/example/Foo.class", foo_class())])?;
    test.write_file("lang.keys.txt", "old")?;

    let (code, _, _) = run(test.generate_command("plugin.jar", "2"))?;

    assert_eq!(code, 0);
    assert_eq!(test.read_key_file("lang.keys.txt")?.version, "2");

    Ok(())
}

#[test]
fn test_generate_uses_config() -> Result<()> {
    let other_marker = "Lcom/example/Translate;";
    let marked = ClassBuilder::class("com/example/Foo")
        .text_field("HELLO", CONSTANT, "Hello", &[MARKER])
        .text_field("BYE", CONSTANT, "Bye", &[other_marker])
        .build();
    let ignored = ClassBuilder::class("com/example/internal/Secret")
        .text_field("SECRET", CONSTANT, "Secret", &[other_marker])
        .build();
    let test = CliTest::with_jar(
        "plugin.jar",
        &[
            ("com/example/Foo.class", marked),
            ("com/example/internal/Secret.class", ignored),
        ],
    )?;
    test.write_file(
        ".jarlocrc.json",
        r#"{
  "marker": "Lcom/example/Translate;",
  "output": "keys.txt",
  "ignores": ["com/example/internal/**"]
}"#,
    )?;

    let (code, stdout, stderr) = run(test.generate_command("plugin.jar", "1"))?;

    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(stdout.starts_with("Scanned 1 class in plugin.jar\n"));
    assert_eq!(
        entries(&test, "keys.txt")?,
        vec![(0, "FIELD: BYE com.example.Foo".to_string(), "Bye".to_string())]
    );

    Ok(())
}

#[test]
fn test_generate_marker_flag_overrides_config() -> Result<()> {
    let class = ClassBuilder::class("com/example/Foo")
        .text_field("HELLO", CONSTANT, "Hello", &[MARKER])
        .text_field("BYE", CONSTANT, "Bye", &["Lcom/example/Translate;"])
        .build();
    let test = CliTest::with_jar("plugin.jar", &[("com/example/Foo.class", class)])?;

    let mut cmd = test.generate_command("plugin.jar", "1");
    cmd.args(["--marker", "Lcom/example/Translate;"]);
    let (code, _, stderr) = run(cmd)?;

    assert_eq!(code, 0, "stderr: {stderr}");
    let literals: Vec<String> = entries(&test, "lang.keys.txt")?
        .into_iter()
        .map(|(_, _, literal)| literal)
        .collect();
    assert_eq!(literals, vec!["Bye"]);

    Ok(())
}

#[test]
fn test_generate_escapes_newlines() -> Result<()> {
    let class = ClassBuilder::class("com/example/Foo")
        .text_field("MULTI", CONSTANT, "line one\nline two", &[MARKER])
        .build();
    let test = CliTest::with_jar("plugin.jar", &[("com/example/Foo.class", class)])?;

    let (code, _, _) = run(test.generate_command("plugin.jar", "1"))?;
    assert_eq!(code, 0);

    let bytes = std::fs::read(test.root().join("lang.keys.txt"))?;
    let text = jarloc::core::keyfile::decode_utf16(&bytes)?;
    assert!(text.contains("0> line one\\nline two\n"));
    assert_eq!(
        entries(&test, "lang.keys.txt")?[0].2,
        "line one\nline two"
    );

    Ok(())
}
