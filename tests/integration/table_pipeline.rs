//! End-to-end pass over a kernel ARP table dump.

use arpscope_application::services::arp_registry;
use arpscope_application::use_cases::{ListEntriesUseCase, RenderCacheUseCase};
use arpscope_infrastructure::system::ProcArpSource;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

fn write_table(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

fn render(path: &str, include_free: bool) -> Vec<String> {
    let source = Arc::new(ProcArpSource::new(path, include_free));
    let use_case = RenderCacheUseCase::new(source, Arc::new(arp_registry().unwrap()));
    use_case.execute().unwrap().lines
}

#[test]
fn test_table_renders_complete_entries() {
    let temp_file = write_table(
        r#"IP address       HW type     Flags       HW address            Mask     Device
192.168.1.1      0x1         0x2         aa:bb:cc:dd:ee:ff     *        eth0
192.168.1.50     0x1         0x2         11:22:33:44:55:66     *        wlan0
"#,
    );

    let lines = render(temp_file.path().to_str().unwrap(), false);

    assert_eq!(
        lines,
        vec![
            "192.168.1.1 at aa:bb:cc:dd:ee:ff, age: 0",
            "192.168.1.50 at 11:22:33:44:55:66, age: 0",
        ]
    );
}

#[test]
fn test_permanent_entry_renders_as_static() {
    let temp_file = write_table(
        r#"IP address       HW type     Flags       HW address            Mask     Device
192.168.1.1      0x1         0x6         aa:bb:cc:dd:ee:ff     *        eth0
"#,
    );

    let lines = render(temp_file.path().to_str().unwrap(), false);
    assert_eq!(lines, vec!["192.168.1.1 at aa:bb:cc:dd:ee:ff, age: ARP_CACHE_STATIC"]);
}

#[test]
fn test_incomplete_entry_needs_include_free() {
    let content = r#"IP address       HW type     Flags       HW address            Mask     Device
192.168.1.1      0x1         0x2         aa:bb:cc:dd:ee:ff     *        eth0
192.168.1.9      0x1         0x0         00:00:00:00:00:00     *        eth0
"#;
    let temp_file = write_table(content);
    let path = temp_file.path().to_str().unwrap();

    assert_eq!(render(path, false), vec!["192.168.1.1 at aa:bb:cc:dd:ee:ff, age: 0"]);

    assert_eq!(
        render(path, true),
        vec![
            "192.168.1.1 at aa:bb:cc:dd:ee:ff, age: 0",
            "192.168.1.9 at 00:00:00:00:00:00, age: ARP_CACHE_FREE",
        ]
    );
}

#[test]
fn test_header_only_table_renders_nothing() {
    let temp_file = write_table(
        "IP address       HW type     Flags       HW address            Mask     Device\n",
    );

    assert!(render(temp_file.path().to_str().unwrap(), true).is_empty());
}

#[test]
fn test_table_entries_serialize_for_json_output() {
    let temp_file = write_table(
        r#"IP address       HW type     Flags       HW address            Mask     Device
192.168.1.1      0x1         0x6         aa:bb:cc:dd:ee:ff     *        eth0
"#,
    );

    let source = Arc::new(ProcArpSource::new(temp_file.path().to_str().unwrap(), false));
    let entries = ListEntriesUseCase::new(source).execute().unwrap();
    let json = serde_json::to_value(&entries).unwrap();

    assert_eq!(
        json,
        serde_json::json!([
            {"ip_addr": "192.168.1.1", "haddr": "aa:bb:cc:dd:ee:ff", "age": "ARP_CACHE_STATIC"}
        ])
    );
}
