use arpscope_application::ports::RecordSource;
use arpscope_domain::{AgeSentinel, FieldValue, InspectError, Record, ARP_ENTRY_TAG};
use std::net::Ipv4Addr;
use std::str::FromStr;
use tracing::{debug, warn};

/// `ATF_COM`: the entry holds a confirmed hardware address.
const FLAG_COMPLETE: u32 = 0x2;
/// `ATF_PERM`: the entry is pinned by an administrator.
const FLAG_PERMANENT: u32 = 0x4;

const ZERO_MAC: &str = "00:00:00:00:00:00";

/// Live kernel ARP table source (reads /proc/net/arp).
///
/// The kernel exports no slot age, so records synthesize one: permanent
/// entries carry the static sentinel, other complete entries age 0, and
/// incomplete slots the free sentinel (yielded only with `include_free`).
pub struct ProcArpSource {
    arp_path: String,
    include_free: bool,
}

impl ProcArpSource {
    pub fn new(arp_path: impl Into<String>, include_free: bool) -> Self {
        Self {
            arp_path: arp_path.into(),
            include_free,
        }
    }
}

impl RecordSource for ProcArpSource {
    fn read_records(&self) -> Result<Vec<Record>, InspectError> {
        let content =
            std::fs::read_to_string(&self.arp_path).map_err(|e| InspectError::TableRead {
                path: self.arp_path.clone(),
                reason: e.to_string(),
            })?;

        let mut records = Vec::new();

        // Format of /proc/net/arp:
        // IP address       HW type     Flags       HW address            Mask     Device
        // 192.168.1.1      0x1         0x2         aa:bb:cc:dd:ee:ff     *        eth0

        for (line_num, line) in content.lines().enumerate() {
            if line_num == 0 {
                continue; // Skip header
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 4 {
                continue;
            }

            let ip_str = fields[0];
            let flags = u32::from_str_radix(fields[2].trim_start_matches("0x"), 16).unwrap_or(0);
            let mac = fields[3];

            let ip = match Ipv4Addr::from_str(ip_str) {
                Ok(ip) => ip,
                Err(e) => {
                    warn!(error = %e, ip = ip_str, "Invalid IP in ARP table");
                    continue;
                }
            };

            // Incomplete entries have no confirmed MAC yet.
            let complete = flags & FLAG_COMPLETE != 0 && mac != ZERO_MAC;
            if !complete && !self.include_free {
                continue;
            }

            let (haddr, age) = if !complete {
                (ZERO_MAC, AgeSentinel::Free.code())
            } else if flags & FLAG_PERMANENT != 0 {
                (mac, AgeSentinel::Static.code())
            } else {
                (mac, 0)
            };

            records.push(
                Record::new(ARP_ENTRY_TAG)
                    .with_field("ip_addr", FieldValue::U32(u32::from(ip)))
                    .with_field("haddr", FieldValue::Text(haddr.to_string()))
                    .with_field("age", FieldValue::I32(age)),
            );
        }

        debug!(entries = records.len(), "ARP table parsed");
        Ok(records)
    }
}
