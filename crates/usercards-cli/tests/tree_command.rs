use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use usercards_testing::TestWorld;

#[test]
fn test_tree_json_describes_cards() {
    let world = TestWorld::new();

    let result = world.run(&["--format", "json", "tree", "ojin"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    let tree = &json["content"]["tree"];
    assert_eq!(tree["kind"], "element");
    assert_eq!(tree["attrs"]["role"], "list");

    let cards = tree["children"].as_array().unwrap();
    assert_eq!(cards.len(), 1);
    let card = &cards[0];
    assert_eq!(card["attrs"]["class"], "card");
    assert_eq!(card["attrs"]["tabindex"], "0");
    assert_eq!(card["children"][0]["tag"], "img");
    assert_eq!(card["children"][0]["attrs"]["loading"], "lazy");
    assert_eq!(card["children"][1]["attrs"]["aria-hidden"], "true");

    let events: Vec<&str> = card["handlers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["event"]["type"].as_str().unwrap())
        .collect();
    assert!(events.contains(&"key_down"));
    assert!(events.contains(&"click"));
}

#[test]
fn test_tree_for_no_match_holds_only_message() {
    let world = TestWorld::new();

    let json = world
        .run(&["--format", "json", "tree", "zzz"])
        .unwrap()
        .json()
        .unwrap();
    let children = json["content"]["tree"]["children"].as_array().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0]["tag"], "p");
    assert_eq!(children[0]["children"][0]["text"], "No results found.");
}

#[test]
fn test_tree_plain_outline() {
    let world = TestWorld::new();

    let mut cmd = cargo_bin_cmd!("usercards");
    world.configure_command(&mut cmd).args(["tree", "mohit"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("div.cards"))
        .stdout(predicate::str::contains("h3 \"mohit chhabra\""));
}
