// crates/splice_pricing/tests/integration_cli.rs

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const COMPONENT: &str = "export function PricingSection() {
  return (
    <section id=\"pricing\">A</section>
  )
}
";

const PAGE: &str = "export default function Home() {
  return (
    <main>
        {/* Pricing Section */}
        <section id=\"pricing\" className=\"py-24\">
          <h2>Old tiers</h2>
        </section>

        {/* FAQ Section */}
        <section id=\"faq\">FAQ</section>
    </main>
  )
}
";

const EXPECTED_PAGE: &str = "export default function Home() {
  return (
    <main>
        {/* Pricing Section */}
        <section id=\"pricing\">A</section>

        {/* FAQ Section */}
        <section id=\"faq\">FAQ</section>
    </main>
  )
}
";

/// Lays out `src/components/pricing-section.tsx` and `src/app/page.tsx`
/// under a fresh temporary project root.
fn create_project(component: &str, page: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "src/components/pricing-section.tsx", component);
    write_file(dir.path(), "src/app/page.tsx", page);
    dir
}

fn write_file(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn read_page(root: &Path) -> String {
    fs::read_to_string(root.join("src/app/page.tsx")).unwrap()
}

fn splice_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("splice_pricing").unwrap();
    cmd.current_dir(cwd).env_remove("SPLICE_PROJECT_ROOT");
    cmd
}

#[test]
fn test_no_arguments_rewrites_page() {
    let project = create_project(COMPONENT, PAGE);
    let removed = PAGE.find("        {/* FAQ Section */").unwrap()
        - PAGE.find("        {/* Pricing Section */").unwrap();
    let inserted = "        <section id=\"pricing\">A</section>".len();

    splice_cmd(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "✅ Successfully updated pricing section in page.tsx",
        ))
        .stdout(predicate::str::contains(format!("   Replaced {} characters", removed)))
        .stdout(predicate::str::contains(format!(
            "   With {} characters of new content",
            inserted
        )));

    assert_eq!(read_page(project.path()), EXPECTED_PAGE);
}

#[test]
fn test_second_run_keeps_page_stable() {
    let project = create_project(COMPONENT, PAGE);
    splice_cmd(project.path()).assert().success();
    splice_cmd(project.path()).assert().success();
    assert_eq!(read_page(project.path()), EXPECTED_PAGE);
}

#[test]
fn test_strict_missing_faq_fails_without_writing() {
    let page = PAGE.replace("{/* FAQ Section */}", "{/* Questions */}");
    let project = create_project(COMPONENT, &page);

    splice_cmd(project.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("FAQ landmark"))
        .stdout(predicate::str::contains("Successfully").not());

    assert_eq!(read_page(project.path()), page);
}

#[test]
fn test_strict_missing_component_section_fails() {
    let project = create_project("export function PricingSection() { return null }\n", PAGE);

    splice_cmd(project.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to extract the pricing section"));

    assert_eq!(read_page(project.path()), PAGE);
}

#[test]
fn test_missing_page_reports_path() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "src/components/pricing-section.tsx", COMPONENT);

    splice_cmd(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("page.tsx"));
}

#[test]
fn test_legacy_missing_start_marker_splices_from_file_start() {
    // No opening tag: the whole component up to the first closing tag is used
    // and the run still reports success.
    let component = "<div>A</section>\n";
    let project = create_project(component, PAGE);

    splice_cmd(project.path())
        .arg("--legacy")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully updated pricing section"));

    let page = read_page(project.path());
    assert!(page.contains("        {/* Pricing Section */}\n        <div>A</section>\n\n        {/* FAQ Section */}"));
}

#[test]
fn test_legacy_missing_end_marker_truncates() {
    let component = "<section id=\"pricing\">never closed\n";
    let project = create_project(component, PAGE);

    splice_cmd(project.path()).arg("--legacy").assert().success();

    let page = read_page(project.path());
    assert!(page.contains("        {/* Pricing Section */}\n        <section \n\n        {/* FAQ Section */}"));
}

#[test]
fn test_dry_run_prints_page_and_keeps_file() {
    let project = create_project(COMPONENT, PAGE);

    splice_cmd(project.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::diff(EXPECTED_PAGE))
        .stderr(predicate::str::contains("Dry run"));

    assert_eq!(read_page(project.path()), PAGE);
}

#[test]
fn test_root_flag_and_env_override() {
    let project = create_project(COMPONENT, PAGE);
    let elsewhere = TempDir::new().unwrap();

    splice_cmd(elsewhere.path())
        .arg("--root")
        .arg(project.path())
        .assert()
        .success();
    assert_eq!(read_page(project.path()), EXPECTED_PAGE);

    let project = create_project(COMPONENT, PAGE);
    splice_cmd(elsewhere.path())
        .env("SPLICE_PROJECT_ROOT", project.path())
        .assert()
        .success();
    assert_eq!(read_page(project.path()), EXPECTED_PAGE);
}

#[test]
fn test_custom_source_and_target_paths() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "ui/plans.tsx", COMPONENT);
    write_file(dir.path(), "pages/index.tsx", PAGE);

    splice_cmd(dir.path())
        .args(["--source", "ui/plans.tsx", "--target", "pages/index.tsx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pricing section in index.tsx"));

    assert_eq!(
        fs::read_to_string(dir.path().join("pages/index.tsx")).unwrap(),
        EXPECTED_PAGE
    );
}

#[test]
fn test_report_counts_characters_for_non_ascii_prices() {
    let component = "export function PricingSection() {
  return (
    <section id=\"pricing\">
      <p>₹499 for 1,000 credits</p>
      <p>₹1,999 for 5,000 credits</p>
    </section>
  )
}
";
    let page = PAGE.replace("Old tiers", "Old tiers from ₹999");
    let project = create_project(component, &page);

    let landmark = page.find("        {/* Pricing Section */").unwrap();
    let faq = page.find("        {/* FAQ Section */").unwrap();
    let removed = page[landmark..faq].chars().count();
    let inserted = "        <section id=\"pricing\">
              <p>₹499 for 1,000 credits</p>
              <p>₹1,999 for 5,000 credits</p>
            </section>"
        .chars()
        .count();
    // Byte counts would be off by two per rupee sign.
    assert_eq!(page[landmark..faq].len(), removed + 2);

    splice_cmd(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("   Replaced {} characters", removed)))
        .stdout(predicate::str::contains(format!(
            "   With {} characters of new content",
            inserted
        )));
}

#[test]
fn test_legacy_missing_faq_keeps_last_character_only() {
    let page = "export default function Home() {
  return (
    <main>
        {/* Pricing Section */}
        <section id=\"pricing\">old</section>
    </main>
  )
}
";
    let project = create_project(COMPONENT, page);
    let landmark = page.find("        {/* Pricing Section */").unwrap() as i64;

    splice_cmd(project.path())
        .arg("--legacy")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "   Replaced {} characters",
            -1 - landmark
        )));

    let expected = format!(
        "{}        {{/* Pricing Section */}}\n        <section id=\"pricing\">A</section>\n\n\n",
        &page[..landmark as usize]
    );
    assert_eq!(read_page(project.path()), expected);
}

#[test]
fn test_help_lists_default_paths() {
    let dir = TempDir::new().unwrap();
    splice_cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("src/components/pricing-section.tsx"))
        .stdout(predicate::str::contains("src/app/page.tsx"));
}
