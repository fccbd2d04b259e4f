use assert_cmd::Command; // Run programs, feeding stdin
use predicates::prelude::*; // Used for writing assertions
use std::path::PathBuf;

fn run(path: &str) -> Command {
    let mut d = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    d.push(path);

    let mut cmd = Command::cargo_bin("e8tags").unwrap();
    cmd.arg(d);
    cmd
}

#[test]
fn file_doesnt_exist() {
    let mut cmd = run("test/file/doesnt/exist");

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("No such file or directory"));
}

#[test]
fn test_single_file() {
    let mut cmd = run("test-files/e8/unterminated.e8s");

    cmd.assert().code(0).stdout(
        predicate::str::is_match(
            "^top\t.*test-files/e8/unterminated.e8s\t1;\"\tv
Bar\t.*test-files/e8/unterminated.e8s\t2;\"\tf
local\t.*test-files/e8/unterminated.e8s\t3;\"\tv\tfunction:Bar
$",
        )
        .unwrap(),
    );
}

#[test]
fn test_directory_walk() {
    let mut cmd = run("test-files");

    cmd.assert()
        .code(0)
        .stdout(predicate::str::contains("Сложить\t"))
        .stdout(predicate::str::contains("\tfunction:Add\n"))
        .stdout(predicate::str::contains("Bar\t"))
        .stdout(predicate::str::contains("ignored.txt").not());
}

#[test]
fn test_stdin_json() {
    let mut cmd = Command::cargo_bin("e8tags").unwrap();
    cmd.arg("--format=json").arg("-").write_stdin("Функция Foo()\nПерем x;\n");

    cmd.assert().code(0).stdout(
        "{\"_type\":\"tag\",\"name\":\"Foo\",\"path\":\"-\",\"line\":1,\"kind\":\"function\"}\n\
         {\"_type\":\"tag\",\"name\":\"x\",\"path\":\"-\",\"line\":2,\"kind\":\"variable\",\"scope\":\"Foo\",\"scopeKind\":\"function\"}\n",
    );
}

#[test]
fn test_kinds_filter() {
    let mut cmd = Command::cargo_bin("e8tags").unwrap();
    cmd.arg("--kinds=f").arg("-").write_stdin("Var a;\nProcedure P()\nEndProcedure\n");

    cmd.assert().code(0).stdout("P\t-\t2;\"\tf\n");
}

#[test]
fn test_legacy_scans_strings() {
    let mut cmd = Command::cargo_bin("e8tags").unwrap();
    cmd.arg("--legacy").arg("-").write_stdin("x = \"var a\";\n");

    cmd.assert().code(0).stdout("a\t-\t1;\"\tv\n");
}

#[test]
fn test_color() {
    let mut cmd = Command::cargo_bin("e8tags").unwrap();
    cmd.arg("--color").arg("-x").arg("-").write_stdin("var a;\n");

    cmd.assert()
        .code(0)
        .stdout(predicate::str::contains("\x1b[1m"));
}

#[test]
fn test_list_kinds() {
    let mut cmd = Command::cargo_bin("e8tags").unwrap();
    cmd.arg("--list-kinds");

    cmd.assert()
        .code(0)
        .stdout("f  function   functions\nv  variable   variables\n");
}

#[test]
fn test_list_maps() {
    let mut cmd = Command::cargo_bin("e8tags").unwrap();
    cmd.arg("--list-maps");

    cmd.assert()
        .code(0)
        .stdout("E8Script   *.e8s *.os *.1scr\n");
}

#[test]
fn test_unknown_flag() {
    let mut cmd = Command::cargo_bin("e8tags").unwrap();
    cmd.arg("--bogus");

    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Unknown flag: --bogus"));
}

#[test]
fn test_inputs_in_argument_order() {
    let mut cmd = run("test-files/e8/unterminated.e8s");
    cmd.arg("-").write_stdin("var s;\n");

    cmd.assert().code(0).stdout(
        predicate::str::is_match("^top\t.*\nBar\t.*\nlocal\t.*\ns\t-\t1;\"\tv\n$").unwrap(),
    );
}

#[test]
fn test_unknown_kind_letter() {
    let mut cmd = Command::cargo_bin("e8tags").unwrap();
    cmd.arg("--kinds=fq").arg("-").write_stdin("var a;\n");

    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Unknown kind: q"));
}
