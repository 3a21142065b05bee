// ---------------------------------------------------------------------------
// Version matching engine
// ---------------------------------------------------------------------------
//
// Correlates detected service versions with the rule catalog. Comparison is
// deliberately coarse: only the first contiguous digit run on each side takes
// part, compared as strings ("2.14.1" vs "2.0-beta9 to 2.14.1" both reduce
// to "2").

use tracing::debug;

use verscan_types::Inventory;

use crate::types::{Finding, Rule};

/// Outcome of comparing a detected version against a rule pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionCmp {
    /// First digit runs are equal.
    Match,
    /// Both sides have a digit run, and they differ.
    NoMatch,
    /// At least one side carries no digits at all.
    Indeterminate,
}

/// Extract the first contiguous run of ASCII digits anywhere in the string.
///
/// "2.14.1" -> "2", "Windows XP to Windows 8.1" -> "8", "beta" -> None.
pub fn first_digit_run(s: &str) -> Option<&str> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let run = &s[start..];
    let end = run
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(run.len());
    Some(&run[..end])
}

/// Compare a detected version string against a rule's affected-versions
/// pattern.
///
/// Digit runs are compared as strings, so "08" and "8" do not match.
pub fn compare_versions(detected: &str, pattern: &str) -> VersionCmp {
    match (first_digit_run(detected), first_digit_run(pattern)) {
        (Some(d), Some(p)) if d == p => VersionCmp::Match,
        (Some(_), Some(_)) => VersionCmp::NoMatch,
        _ => VersionCmp::Indeterminate,
    }
}

/// Check every versioned inventory entry against the rule catalog.
///
/// Entries with an empty version string are skipped. Findings come out in
/// inventory iteration order, then rule order, so repeated runs over the
/// same inputs produce the same sequence.
pub fn match_inventory(inventory: &Inventory, rules: &[Rule]) -> Vec<Finding> {
    let mut findings = Vec::new();

    for (addr, port, record) in inventory.iter_records() {
        if !record.has_version() {
            continue;
        }
        for rule in rules {
            if !record.product.contains(&rule.product) {
                continue;
            }
            match compare_versions(&record.version, &rule.affected_versions) {
                VersionCmp::Match => findings.push(Finding {
                    ip: addr.to_string(),
                    port: port.to_string(),
                    service: record.product.clone(),
                    version: record.version.clone(),
                    cve: rule.id.clone(),
                    severity: rule.severity,
                }),
                VersionCmp::NoMatch => {}
                VersionCmp::Indeterminate => {
                    debug!(
                        host = addr,
                        port,
                        version = %record.version,
                        rule = %rule.id,
                        "version comparison indeterminate"
                    );
                }
            }
        }
    }

    findings
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;
    use verscan_types::{HostEntry, ServiceRecord};

    fn rule(id: &str, product: &str, affected: &str, severity: Severity) -> Rule {
        Rule {
            id: id.into(),
            product: product.into(),
            affected_versions: affected.into(),
            severity,
        }
    }

    fn record(product: &str, version: &str) -> ServiceRecord {
        ServiceRecord {
            name: "test".into(),
            product: product.into(),
            version: version.into(),
            ..Default::default()
        }
    }

    fn inventory(entries: &[(&str, &str, &str, &str)]) -> Inventory {
        let mut inv = Inventory::new();
        for (addr, port, product, version) in entries {
            let mut host = match inv.get(addr) {
                Some(existing) => existing.clone(),
                None => HostEntry::new(*addr),
            };
            host.insert(*port, record(product, version));
            inv.insert_host(host);
        }
        inv
    }

    #[test]
    fn first_digit_run_basic() {
        assert_eq!(first_digit_run("2.14.1"), Some("2"));
        assert_eq!(first_digit_run("8.9p1"), Some("8"));
        assert_eq!(first_digit_run("v12.3"), Some("12"));
        assert_eq!(first_digit_run("Windows XP to Windows 8.1"), Some("8"));
        assert_eq!(first_digit_run("2.0-beta9 to 2.14.1"), Some("2"));
    }

    #[test]
    fn first_digit_run_no_digits() {
        assert_eq!(first_digit_run(""), None);
        assert_eq!(first_digit_run("beta"), None);
        assert_eq!(first_digit_run("unknown"), None);
    }

    #[test]
    fn compare_versions_match_on_equal_runs() {
        assert_eq!(
            compare_versions("2.14.1", "2.0-beta9 to 2.14.1"),
            VersionCmp::Match
        );
        assert_eq!(compare_versions("8.1", "Windows XP to Windows 8.1"), VersionCmp::Match);
    }

    #[test]
    fn compare_versions_no_match_on_different_runs() {
        assert_eq!(
            compare_versions("3.0.0", "2.0-beta9 to 2.14.1"),
            VersionCmp::NoMatch
        );
        assert_eq!(compare_versions("12.0", "1.20.0 and earlier"), VersionCmp::NoMatch);
    }

    #[test]
    fn compare_versions_string_equality_not_numeric() {
        // Leading zeros matter: the runs are compared as strings
        assert_eq!(compare_versions("08", "8.0"), VersionCmp::NoMatch);
    }

    #[test]
    fn compare_versions_indeterminate_without_digits() {
        assert_eq!(compare_versions("unknown", "2.x"), VersionCmp::Indeterminate);
        assert_eq!(compare_versions("2.4", "all versions"), VersionCmp::Indeterminate);
        assert_eq!(compare_versions("", ""), VersionCmp::Indeterminate);
    }

    #[test]
    fn match_emits_finding_for_affected_version() {
        let inv = inventory(&[("10.0.0.5", "8080", "Apache Log4j", "2.14.1")]);
        let rules = [rule(
            "CVE-2021-44228",
            "Apache Log4j",
            "2.0-beta9 to 2.14.1",
            Severity::Critical,
        )];
        let findings = match_inventory(&inv, &rules);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].ip, "10.0.0.5");
        assert_eq!(findings[0].port, "8080");
        assert_eq!(findings[0].service, "Apache Log4j");
        assert_eq!(findings[0].version, "2.14.1");
        assert_eq!(findings[0].cve, "CVE-2021-44228");
        assert_eq!(findings[0].severity, Severity::Critical);
    }

    #[test]
    fn match_skips_unaffected_major_version() {
        let inv = inventory(&[("10.0.0.5", "8080", "Apache Log4j", "3.0.0")]);
        let rules = [rule(
            "CVE-2021-44228",
            "Apache Log4j",
            "2.0-beta9 to 2.14.1",
            Severity::Critical,
        )];
        assert!(match_inventory(&inv, &rules).is_empty());
    }

    #[test]
    fn match_skips_empty_version() {
        let inv = inventory(&[("10.0.0.5", "8080", "Apache Log4j", "")]);
        let rules = [rule(
            "CVE-2021-44228",
            "Apache Log4j",
            "2.0-beta9 to 2.14.1",
            Severity::Critical,
        )];
        assert!(match_inventory(&inv, &rules).is_empty());
    }

    #[test]
    fn match_product_substring_is_case_sensitive() {
        let inv = inventory(&[("10.0.0.5", "8080", "apache log4j", "2.14.1")]);
        let rules = [rule(
            "CVE-2021-44228",
            "Apache Log4j",
            "2.0-beta9 to 2.14.1",
            Severity::Critical,
        )];
        assert!(match_inventory(&inv, &rules).is_empty());
    }

    #[test]
    fn match_product_matches_as_substring() {
        let inv = inventory(&[("10.0.0.5", "22", "OpenSSH 7.7p1 Debian", "7.7p1")]);
        let rules = [rule("CVE-2018-15473", "OpenSSH", "7.2 to 7.7", Severity::Medium)];
        assert_eq!(match_inventory(&inv, &rules).len(), 1);
    }

    #[test]
    fn match_order_is_inventory_then_rule_order() {
        let inv = inventory(&[
            ("10.0.0.2", "80", "Apache httpd", "2.4.49"),
            ("10.0.0.1", "8080", "Apache httpd", "2.4.50"),
        ]);
        let rules = [
            rule("CVE-0000-0002", "Apache httpd", "2.4", Severity::High),
            rule("CVE-0000-0001", "Apache httpd", "2.x before 2.5", Severity::Low),
        ];
        let findings = match_inventory(&inv, &rules);
        let order: Vec<(&str, &str)> = findings
            .iter()
            .map(|f| (f.ip.as_str(), f.cve.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("10.0.0.2", "CVE-0000-0002"),
                ("10.0.0.2", "CVE-0000-0001"),
                ("10.0.0.1", "CVE-0000-0002"),
                ("10.0.0.1", "CVE-0000-0001"),
            ]
        );
    }

    #[test]
    fn match_is_deterministic() {
        let inv = inventory(&[
            ("10.0.0.1", "22", "OpenSSH", "7.4"),
            ("10.0.0.1", "80", "Apache httpd", "2.4.49"),
        ]);
        let rules = [
            rule("CVE-2018-15473", "OpenSSH", "7.2 to 7.7", Severity::Medium),
            rule("CVE-2021-41773", "Apache httpd", "2.4.49", Severity::High),
        ];
        let first = match_inventory(&inv, &rules);
        let second = match_inventory(&inv, &rules);
        assert_eq!(first, second);
    }

    #[test]
    fn match_indeterminate_produces_no_finding() {
        let inv = inventory(&[("10.0.0.5", "445", "Windows SMB", "Windows Server")]);
        let rules = [rule(
            "CVE-2017-0144",
            "Windows SMB",
            "Windows XP to Windows 8.1",
            Severity::Critical,
        )];
        assert!(match_inventory(&inv, &rules).is_empty());
    }
}
