use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use usercards_testing::TestWorld;

#[test]
fn test_show_presents_name_and_bio() {
    let world = TestWorld::new();

    let mut cmd = cargo_bin_cmd!("usercards");
    world.configure_command(&mut cmd).args(["show", "OJIN oklawa"]);
    cmd.assert().success().stdout(
        "Ojin Oklawa\n\ntoo glam to give a damn 💅 | filter free soul\n",
    );
}

#[test]
fn test_show_json() {
    let world = TestWorld::new();

    let json = world
        .run(&["--format", "json", "show", "tanay rawat"])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(json["content"]["name"], "tanay rawat");
    assert_eq!(
        json["content"]["message"],
        "tanay rawat\n\ndon’t text, just vibe 🪩 | soft heart, sharp mind"
    );
}

#[test]
fn test_show_unknown_name_fails() {
    let world = TestWorld::new();

    let mut cmd = cargo_bin_cmd!("usercards");
    world.configure_command(&mut cmd).args(["show", "nobody"]);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: No profile named 'nobody'"));
}
