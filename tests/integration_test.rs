//! Integration tests for subnet-merge
//!
//! These tests run the complete workflow from reading a network file to the
//! formatted output.

use std::net::Ipv4Addr;
use subnet_merge::{
    input::{parse_network_lines, read_network_file},
    merge_network_file, merge_report,
    models::Network,
    output::{format_text, write_networks, OutputFormat},
    processing::{is_minimal, is_sorted_by_addr, merge_networks},
};

/// Covered addresses as sorted, joined inclusive ranges.
fn coverage(networks: &[Network]) -> Vec<(u32, u32)> {
    let mut ranges: Vec<(u32, u32)> = networks
        .iter()
        .map(|n| (u32::from(n.lo()), u32::from(n.hi())))
        .collect();
    ranges.sort();

    let mut joined: Vec<(u32, u32)> = Vec::new();
    for (lo, hi) in ranges {
        match joined.last_mut() {
            Some(last) if u64::from(lo) <= u64::from(last.1) + 1 => last.1 = last.1.max(hi),
            _ => joined.push((lo, hi)),
        }
    }
    joined
}

fn cidrs(networks: &[Network]) -> Vec<String> {
    networks.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_full_workflow_with_file() {
    let report = merge_network_file("src/tests/test_data/networks_02.txt")
        .expect("Failed to merge network file");

    assert_eq!(report.input_count, 14, "Expected 14 valid networks in test data");
    assert_eq!(
        cidrs(&report.networks),
        vec![
            "10.0.0.0/23",
            "10.0.2.0/24",
            "10.0.4.0/23",
            "172.16.0.0/12",
            "192.168.1.0/24",
            "192.168.2.0/23",
            "192.168.10.1/32",
            "192.168.10.2/31",
        ]
    );
    assert_eq!(report.stats.merges, 6);
    assert_eq!(report.stats.passes, 3);

    let mut buf = Vec::new();
    write_networks(&mut buf, &report.networks, OutputFormat::Text).expect("Failed to write");
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.lines().count(), 8);
    assert!(text.starts_with("10.0.0.0/23\n"));
}

#[test]
fn test_four_quarters_file() {
    let report = merge_network_file("src/tests/test_data/networks_01.txt")
        .expect("Failed to merge network file");
    assert_eq!(format_text(&report.networks), "10.0.0.0/22\n");
}

#[test]
fn test_missing_file() {
    assert!(merge_network_file("src/tests/test_data/missing.txt").is_err());
}

#[test]
fn test_result_properties() {
    let input = read_network_file("src/tests/test_data/networks_02.txt")
        .expect("Failed to read network file");
    let output = merge_networks(input.clone());

    assert_eq!(coverage(&input), coverage(&output), "covered addresses changed");
    assert!(is_minimal(&output), "adjacent buddies left: {:?}", cidrs(&output));
    assert!(is_sorted_by_addr(&output));
    assert_eq!(merge_networks(output.clone()), output, "merge is not idempotent");
}

#[test]
fn test_result_properties_host_routes() {
    // 64 consecutive /32 networks with one hole collapse into a handful of blocks.
    let input: Vec<Network> = (0u8..64)
        .filter(|i| *i != 37)
        .map(|i| Network::from_parts(Ipv4Addr::new(10, 9, 8, i), 32).unwrap())
        .collect();
    let output = merge_networks(input.clone());

    assert_eq!(coverage(&input), coverage(&output));
    assert!(is_minimal(&output));
    assert!(is_sorted_by_addr(&output));
    assert_eq!(
        cidrs(&output),
        vec![
            "10.9.8.0/27",
            "10.9.8.32/30",
            "10.9.8.36/32",
            "10.9.8.38/31",
            "10.9.8.40/29",
            "10.9.8.48/28",
        ]
    );
}

#[test]
fn test_unsorted_input_is_kept_in_order() {
    let input = parse_network_lines(std::io::Cursor::new(
        "10.0.1.0/24\n10.0.0.0/24\n10.0.2.0/24\n10.0.3.0/24\n",
    ))
    .unwrap();
    let report = merge_report(input);
    assert_eq!(
        cidrs(&report.networks),
        vec!["10.0.1.0/24", "10.0.0.0/24", "10.0.2.0/23"]
    );
}
