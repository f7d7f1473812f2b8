mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn user_can_scaffold_component() {
    let ctx = TestContext::new();

    ctx.run_with_answers(&["c", "Button", ""])
        .success()
        .stdout(predicate::str::contains("components/Button/Button.tsx"))
        .stdout(predicate::str::contains("components/Button/Button.module.css"))
        .stdout(predicate::str::contains("components/Button/index.ts"))
        .stdout(predicate::str::contains("All files created."));

    let script = ctx.read_src("components/Button/Button.tsx");
    assert!(script.contains("import styles from \"./Button.module.css\""));
    assert!(script.contains("interface ButtonProps"));
    assert!(script.contains("<div>Button</div>"));
    assert!(script.contains("export default Button"));
    assert_eq!(ctx.read_src("components/Button/Button.module.css"), "");
    assert_eq!(
        ctx.read_src("components/Button/index.ts"),
        "export {default} from \"./Button\";\n"
    );
}

#[test]
fn nested_page_path_uses_parent_folder() {
    let ctx = TestContext::new();

    ctx.run_with_answers(&["p", "MyCourses/AuthorCourses", "y"]).success();

    ctx.assert_src_file("pages/MyCourses/AuthorCourses.tsx");
    ctx.assert_src_file("pages/MyCourses/AuthorCourses.module.css");
    assert!(!ctx.src_path().join("pages/MyCourses/AuthorCourses").exists());
    assert_eq!(
        ctx.read_src("pages/MyCourses/index.ts"),
        "export {default} from \"./AuthorCourses\";\n"
    );
}

#[test]
fn declining_exits_cleanly_without_writing() {
    let ctx = TestContext::new();

    ctx.run_with_answers(&["c", "Button", "n"])
        .success()
        .stdout(predicate::str::contains("Nothing was created"))
        .stdout(predicate::str::contains("All files created.").not());

    ctx.assert_work_dir_empty();
}

#[test]
fn invalid_answers_are_asked_again() {
    let ctx = TestContext::new();

    ctx.run_with_answers(&["x", "P", "", "Profile", "maybe", "YES"])
        .success()
        .stdout(predicate::str::contains("Didn't catch that").count(2))
        .stdout(predicate::str::contains("needs a name"));

    ctx.assert_src_file("pages/Profile/Profile.tsx");
}

#[test]
fn paths_outside_category_are_asked_again() {
    let ctx = TestContext::new();

    ctx.run_with_answers(&["c", "/tmp/Evil", "../Evil", "Evil", ""])
        .success()
        .stdout(predicate::str::contains("needs a name").count(2));

    ctx.assert_src_file("components/Evil/Evil.tsx");
    let entries: Vec<_> = std::fs::read_dir(ctx.work_dir()).unwrap().collect();
    assert_eq!(entries.len(), 1, "only src/ should be created");
}

#[cfg(unix)]
#[test]
fn sigint_while_waiting_for_input_exits_quietly() {
    use std::io::Read;
    use std::process::Command;

    let ctx = TestContext::new();
    let mut child = ctx.spawn_cli();
    let _stdin = child.stdin.take().unwrap();
    let mut stdout = child.stdout.take().unwrap();

    let mut shown = Vec::new();
    let mut byte = [0u8; 1];
    while !shown.ends_with(b"pages: ") {
        let read = stdout.read(&mut byte).unwrap();
        assert_ne!(read, 0, "stdout closed before the first prompt");
        shown.push(byte[0]);
    }

    let kill = Command::new("kill").arg("-INT").arg(child.id().to_string()).status().unwrap();
    assert!(kill.success());

    let status = child.wait().unwrap();
    let mut stderr = String::new();
    child.stderr.take().unwrap().read_to_string(&mut stderr).unwrap();

    assert_eq!(status.code(), Some(0));
    assert_eq!(stderr, "");
    ctx.assert_work_dir_empty();
}

#[test]
fn closed_stdin_exits_quietly() {
    let ctx = TestContext::new();

    ctx.cli().write_stdin("c\n").assert().success().stderr(predicate::str::is_empty());

    ctx.assert_work_dir_empty();
}

#[test]
fn existing_barrel_is_left_alone() {
    let ctx = TestContext::new();
    ctx.write_src("pages/Courses/index.ts", "export {default} from \"./List\";\n");

    ctx.run_with_answers(&["p", "Courses/Card", ""]).success();

    ctx.assert_src_file("pages/Courses/Card.tsx");
    assert_eq!(ctx.read_src("pages/Courses/index.ts"), "export {default} from \"./List\";\n");
}

#[test]
fn rerun_rewrites_script_but_not_style() {
    let ctx = TestContext::new();
    ctx.run_with_answers(&["c", "Button", ""]).success();
    let generated = ctx.read_src("components/Button/Button.tsx");

    ctx.write_src("components/Button/Button.tsx", "// edited");
    ctx.write_src("components/Button/Button.module.css", ".root {}");
    ctx.run_with_answers(&["c", "Button", ""]).success();

    assert_eq!(ctx.read_src("components/Button/Button.tsx"), generated);
    assert_eq!(ctx.read_src("components/Button/Button.module.css"), ".root {}");
}

#[test]
fn root_flag_moves_output() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--root", "app"])
        .write_stdin("c\nCard\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("components/Card/Card.tsx"));

    assert!(ctx.work_dir().join("app/components/Card/Card.tsx").is_file());
    assert!(!ctx.src_path().exists());
}

#[test]
fn config_file_changes_extensions() {
    let ctx = TestContext::new();
    std::fs::write(
        ctx.work_dir().join("mkcomponent.toml"),
        "[extensions]\nscript = \"jsx\"\nstyle = \"scss\"\nindex = \"js\"\n",
    )
    .unwrap();

    ctx.run_with_answers(&["c", "Card", ""]).success();

    ctx.assert_src_file("components/Card/Card.jsx");
    ctx.assert_src_file("components/Card/Card.scss");
    ctx.assert_src_file("components/Card/index.js");
    assert!(ctx.read_src("components/Card/Card.jsx").contains("./Card.scss"));
}

#[test]
fn invalid_config_fails_with_error() {
    let ctx = TestContext::new();
    std::fs::write(ctx.work_dir().join("mkcomponent.toml"), "[extensions]\nstyle = \".css\"\n")
        .unwrap();

    ctx.run_with_answers(&["c", "Card", ""])
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("-v")
        .write_stdin("c\nButton\n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("file ready"))
        .stdout(predicate::str::contains("file ready").not());
}
