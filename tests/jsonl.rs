use lang_detect::jsonl::run;
use serde_json::Value;
use std::io::Cursor;

#[test]
fn processes_records_in_order_and_skips_blank_lines() {
    let input = concat!(
        "{\"id\": \"t_001\", \"text\": \"Cramps today. Energy low.\"}\n",
        "\n",
        "   \n",
        "{\"id\": \"t_003\", \"text\": \"आज बहुत थकान है 😩\"}\n",
        "{\"id\": \"t_021\", \"text\": \"12345 !!!\"}\n",
    );
    let mut out = Vec::new();
    let processed = run(Cursor::new(input), &mut out).unwrap();
    assert_eq!(processed, 3);

    let lines: Vec<Value> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["id"], "t_001");
    assert_eq!(lines[0]["primary_language"], "en");
    assert_eq!(lines[1]["id"], "t_003");
    assert_eq!(lines[1]["primary_language"], "hi");
    assert_eq!(lines[1]["script"], "devanagari");
    assert_eq!(lines[2]["id"], "t_021");
    assert_eq!(lines[2]["primary_language"], "unknown");
    assert_eq!(lines[2]["confidence"], 0.2);
}

#[test]
fn malformed_record_reports_line_number() {
    let input = "{\"id\": \"t_001\", \"text\": \"ok fine\"}\nnot json\n";
    let mut out = Vec::new();
    let err = run(Cursor::new(input), &mut out).unwrap_err();
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn empty_input_processes_nothing() {
    let mut out = Vec::new();
    let processed = run(Cursor::new(""), &mut out).unwrap();
    assert_eq!(processed, 0);
    assert!(out.is_empty());
}
