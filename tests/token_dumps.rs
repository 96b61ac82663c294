use lox_scanner::scan;
use std::fs;
use test_generator::test_resources;

fn dump(source: &str) -> String {
    let (tokens, errors) = scan(source);
    let mut out = String::new();
    for token in tokens.iter() {
        out.push_str(&format!("{} {}\n", token.line(), token));
    }
    for e in errors.iter() {
        out.push_str(&format!("{}\n", e));
    }
    out
}

#[test_resources("tests/fixtures/*.lox")]
fn scans_fixture(resource: &str) {
    let source = fs::read_to_string(resource).expect("Could not read fixture");
    let expected_path = resource.replace(".lox", ".tokens");
    let expected = fs::read_to_string(&expected_path).expect("Could not read expected tokens");

    assert_eq!(expected, dump(&source), "token dump mismatch for {}", resource);
}
