//! End-to-end pass over a raw cache snapshot: bytes in, rendered lines out.

use arpscope_application::services::arp_registry;
use arpscope_application::use_cases::{ListEntriesUseCase, RenderCacheUseCase};
use arpscope_domain::config::LayoutConfig;
use arpscope_infrastructure::snapshot::{ImageRecordSource, MemoryImage};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

const FREE: i32 = -2;
const STATIC: i32 = -1;

/// One 48-byte slot in the LP64 target layout.
fn slot(ip: u32, mac: [u8; 6], age: i32) -> Vec<u8> {
    let mut bytes = vec![0u8; 48];
    bytes[0..4].copy_from_slice(&ip.to_le_bytes());
    bytes[4..10].copy_from_slice(&mac);
    bytes[12..16].copy_from_slice(&age.to_le_bytes());
    bytes
}

fn cache_image(slots: &[Vec<u8>]) -> MemoryImage {
    MemoryImage::from_bytes(slots.concat(), false)
}

fn render(image: MemoryImage, include_free: bool) -> Vec<String> {
    let source = Arc::new(ImageRecordSource::new(
        image,
        LayoutConfig::default(),
        include_free,
    ));
    let use_case = RenderCacheUseCase::new(source, Arc::new(arp_registry().unwrap()));
    use_case.execute().unwrap().lines
}

#[test]
fn test_snapshot_renders_live_entries() {
    let image = cache_image(&[
        slot(0xC0A80001, [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF], 42),
        slot(0x0A000001, [0x00, 0x11, 0x22, 0x33, 0x44, 0x55], STATIC),
        slot(0, [0; 6], FREE),
        slot(0xC0A80063, [0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x01], 71_999),
    ]);

    let lines = render(image, false);

    assert_eq!(
        lines,
        vec![
            "192.168.0.1 at aa:bb:cc:dd:ee:ff, age: 42",
            "10.0.0.1 at 00:11:22:33:44:55, age: ARP_CACHE_STATIC",
            "192.168.0.99 at de:ad:be:ef:00:01, age: 71999",
        ]
    );
}

#[test]
fn test_include_free_shows_every_slot() {
    let image = cache_image(&[
        slot(0xC0A80001, [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF], 42),
        slot(0, [0; 6], FREE),
    ]);

    let lines = render(image, true);

    assert_eq!(
        lines,
        vec![
            "192.168.0.1 at aa:bb:cc:dd:ee:ff, age: 42",
            "0.0.0.0 at 00:00:00:00:00:00, age: ARP_CACHE_FREE",
        ]
    );
}

#[test]
fn test_full_cache_with_mostly_free_slots() {
    // A realistic cache: 50 slots, three of them live.
    let mut slots = vec![slot(0, [0; 6], FREE); 50];
    slots[0] = slot(0xC0A80101, [0x02, 0x42, 0xAC, 0x11, 0x00, 0x02], 3);
    slots[7] = slot(0xC0A80102, [0x02, 0x42, 0xAC, 0x11, 0x00, 0x03], STATIC);
    slots[49] = slot(0xC0A80103, [0x02, 0x42, 0xAC, 0x11, 0x00, 0x04], 7_200);

    let lines = render(cache_image(&slots), false);

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "192.168.1.1 at 02:42:ac:11:00:02, age: 3");
    assert_eq!(lines[1], "192.168.1.2 at 02:42:ac:11:00:03, age: ARP_CACHE_STATIC");
    assert_eq!(lines[2], "192.168.1.3 at 02:42:ac:11:00:04, age: 7200");
}

#[test]
fn test_corrupt_slot_does_not_hide_the_rest() {
    let image = cache_image(&[
        slot(0xC0A80001, [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF], 42),
        slot(0x0A000001, [1; 6], -77),
        slot(0x0A000002, [2; 6], 9),
    ]);

    let source = Arc::new(ImageRecordSource::new(image, LayoutConfig::default(), false));
    let use_case = RenderCacheUseCase::new(source, Arc::new(arp_registry().unwrap()));
    let rendered = use_case.execute().unwrap();

    assert_eq!(rendered.lines.len(), 2);
    assert_eq!(rendered.skipped, 1);
}

#[test]
fn test_empty_snapshot_renders_nothing() {
    let lines = render(MemoryImage::from_bytes(Vec::new(), false), true);
    assert!(lines.is_empty());
}

#[test]
fn test_entries_serialize_for_json_output() {
    let image = cache_image(&[
        slot(0xC0A80001, [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF], 42),
        slot(0x0A000001, [0x00, 0x11, 0x22, 0x33, 0x44, 0x55], STATIC),
    ]);

    let source = Arc::new(ImageRecordSource::new(image, LayoutConfig::default(), false));
    let entries = ListEntriesUseCase::new(source).execute().unwrap();
    let json = serde_json::to_value(&entries).unwrap();

    assert_eq!(
        json,
        serde_json::json!([
            {"ip_addr": "192.168.0.1", "haddr": "aa:bb:cc:dd:ee:ff", "age": 42},
            {"ip_addr": "10.0.0.1", "haddr": "00:11:22:33:44:55", "age": "ARP_CACHE_STATIC"}
        ])
    );
}

#[test]
fn test_snapshot_file_round_trip() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let data = [
        slot(0xC0A80001, [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF], 42),
        slot(0, [0; 6], FREE),
    ]
    .concat();
    temp_file.write_all(&data).unwrap();
    temp_file.flush().unwrap();

    let image = MemoryImage::open(temp_file.path(), false).unwrap();
    let lines = render(image, false);

    assert_eq!(lines, vec!["192.168.0.1 at aa:bb:cc:dd:ee:ff, age: 42"]);
}
