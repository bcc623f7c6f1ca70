//! Integration tests for the ReportBuilder API

use vlandoc::{
    ReportBuilder, VlandocError,
    config::{AppConfig, HeaderLayout, LabelConfig, ParserConfig, TableConfig, WikiConfig},
    range::RangePolicy,
};

const SOURCE: &str = r#"hostname "lab-sw"
trunk 21-22 Trk1
interface 1
   name "Server A"
   exit
vlan 1
   name "DEFAULT_VLAN"
   untagged 2-20,Trk1
   exit
vlan 10
   name "Servers"
   untagged 1
   tagged Trk1
   exit
"#;

#[test]
fn test_builder_default() {
    let builder = ReportBuilder::default();
    assert!(builder.config().table().collapse());
}

#[test]
fn test_render_default_report() {
    let builder = ReportBuilder::default();
    let switch = builder.parse(SOURCE).expect("Failed to parse");
    let wiki = builder.render_wiki(&switch).expect("Failed to render");

    let lines: Vec<&str> = wiki.lines().collect();
    assert_eq!(lines[0], "|< 100% - - - 3em 3em >|");
    assert!(lines[1].starts_with("^ lab-sw ^^^ VLAN configuration"));
    assert_eq!(lines.len(), 2 + 1 + 3);
    assert!(lines[3].starts_with("| 1     |"));
    assert!(lines[4].starts_with("| 2-20  |"));
    assert!(lines[5].starts_with("| 21-22 | Trk1"));
}

#[test]
fn test_render_without_collapse() {
    let mut config = AppConfig::default();
    config.table_mut().set_collapse(false);
    let builder = ReportBuilder::new(config);

    let switch = builder.parse(SOURCE).unwrap();
    let table = builder.build_table(&switch);
    assert_eq!(table.rows().len(), 22);
}

#[test]
fn test_render_with_custom_sections() {
    let config = AppConfig::new(
        ParserConfig::new(false, RangePolicy::Strict),
        TableConfig::new(true, "Trk"),
        WikiConfig::default(),
        LabelConfig::new("Port", "Trunk", "Beskrivning", "VLAN-konfiguration"),
    );
    let builder = ReportBuilder::new(config);

    let switch = builder.parse(SOURCE).unwrap();
    assert_eq!(switch.hostname(), "");
    let wiki = builder.render_wiki(&switch).unwrap();
    assert!(wiki.contains("^ Beskrivning "));
    assert!(wiki.contains(" VLAN-konfiguration ^^"));
}

#[test]
fn test_stacked_layout() {
    let mut config = AppConfig::default();
    config.wiki_mut().set_layout(HeaderLayout::Stacked);
    config.wiki_mut().set_width_hint(false);
    let builder = ReportBuilder::new(config);

    let switch = builder.parse(SOURCE).unwrap();
    let wiki = builder.render_wiki(&switch).unwrap();
    let second = wiki.lines().nth(1).unwrap();
    assert!(second.starts_with("^ :::"));
    assert!(second.ends_with("^  1 ^  10 ^"));
}

#[test]
fn test_parse_error_keeps_source() {
    let source = "vlan 10\n   untagged A1-B2\n";
    let builder = ReportBuilder::default();

    match builder.parse(source) {
        Err(VlandocError::Parse { err, src }) => {
            assert_eq!(src, source);
            assert_eq!(err.diagnostics().len(), 1);
        }
        other => panic!("Expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_empty_input_renders_header_only() {
    let builder = ReportBuilder::default();
    let switch = builder.parse("").unwrap();
    let wiki = builder.render_wiki(&switch).unwrap();

    assert_eq!(wiki.lines().count(), 3);
    assert!(wiki.lines().all(|line| !line.starts_with("| ")));
}

#[test]
fn test_write_to_writer() {
    let builder = ReportBuilder::default();
    let switch = builder.parse(SOURCE).unwrap();

    let mut out = Vec::new();
    builder.write_wiki(&switch, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        builder.render_wiki(&switch).unwrap()
    );
}
