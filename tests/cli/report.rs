use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_missing_and_dynamic_keys() -> Result<()> {
    let test = CliTest::with_locale(r#"{"greeting": {"hello": "Hi"}, "farewell": "Bye"}"#)?;
    test.write_file(
        "src/components/Greeting.jsx",
        r#"
  export function Greeting({ id }) {
      return (
          <div>
              <h1>{t("greeting.hello")}</h1>
              <p>{t('farewell')}</p>
              <p>{t("greeting.missing")}</p>
              <span>{t(`item.${id}.label`)}</span>
          </div>
      );
  }
  "#,
    )?;

    let out = test.run(&[])?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stderr, "");
    assert_snapshot!(out.stdout, @r#"
    {
      "missingKeys": [
        "greeting.missing"
      ],
      "usedKeyCount": 3,
      "translationKeyCount": 2,
      "dynamicKeys": [
        "item.${id}.label"
      ]
    }
    "#);

    Ok(())
}

#[test]
fn test_no_sources() -> Result<()> {
    let test = CliTest::with_locale(r#"{"nav": {"home": "Home", "cart": "Cart"}}"#)?;

    let out = test.run(&[])?;

    assert_eq!(out.code, Some(0));
    assert_snapshot!(out.stdout, @r#"
    {
      "missingKeys": [],
      "usedKeyCount": 0,
      "translationKeyCount": 2,
      "dynamicKeys": []
    }
    "#);

    Ok(())
}

#[test]
fn test_ignored_directories() -> Result<()> {
    let test = CliTest::with_locale(r#"{"ok": "Ok"}"#)?;
    test.write_file("src/App.tsx", r#"const label = t("ok");"#)?;
    test.write_file("src/node_modules/pkg/index.js", r#"t("pkg.key")"#)?;
    test.write_file("src/coverage/lcov.js", r#"t(`cov.${x}`)"#)?;
    test.write_file("src/.next/server/page.js", r#"t("next.key")"#)?;

    let out = test.run(&[])?;

    assert_snapshot!(out.stdout, @r#"
    {
      "missingKeys": [],
      "usedKeyCount": 1,
      "translationKeyCount": 1,
      "dynamicKeys": []
    }
    "#);

    Ok(())
}

#[test]
fn test_only_src_is_scanned() -> Result<()> {
    let test = CliTest::with_locale(r#"{"ok": "Ok"}"#)?;
    test.write_file("src/main.js", r#"t("ok")"#)?;
    test.write_file("scripts/seed.js", r#"t("outside.src")"#)?;

    let out = test.run(&[])?;

    assert_eq!(out.code, Some(0));
    assert!(!out.stdout.contains("outside.src"));
    assert!(out.stdout.contains(r#""usedKeyCount": 1"#));

    Ok(())
}

#[test]
fn test_non_ascii_keys_are_not_escaped() -> Result<()> {
    let test = CliTest::with_locale(r#"{"panier": {"titre": "Votre panier"}}"#)?;
    test.write_file(
        "src/Cart.tsx",
        "t('panier.titre');\nt(\n  \"panier.vidé\"\n);\nt(\"購物車.標題\");",
    )?;

    let out = test.run(&[])?;

    assert_snapshot!(out.stdout, @r#"
    {
      "missingKeys": [
        "panier.vidé",
        "購物車.標題"
      ],
      "usedKeyCount": 3,
      "translationKeyCount": 1,
      "dynamicKeys": []
    }
    "#);

    Ok(())
}

#[test]
fn test_verbose_writes_diagnostics_to_stderr() -> Result<()> {
    let test = CliTest::with_locale(r#"{"a": "A", "b": "B"}"#)?;
    test.write_file("src/a.js", r#"t("a"); t("c")"#)?;

    let quiet = test.run(&[])?;
    let verbose = test.run(&["--verbose"])?;

    assert_eq!(verbose.code, Some(0));
    assert_eq!(verbose.stdout, quiet.stdout);
    assert!(verbose.stderr.contains("config:"));
    assert!(verbose.stderr.contains("node_modules"));
    assert!(
        verbose
            .stderr
            .contains("Scanned 1 source file, 2 translation keys, 1 missing")
    );

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.run(&["--help"])?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("--verbose"));
    assert!(out.stdout.contains("Usage: keygap"));

    Ok(())
}

#[test]
fn test_rejects_positional_arguments() -> Result<()> {
    let test = CliTest::with_locale("{}")?;

    let out = test.run(&["src"])?;

    assert_eq!(out.code, Some(2));
    assert_eq!(out.stdout, "");

    Ok(())
}
