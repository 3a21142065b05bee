// ---------------------------------------------------------------------------
// Builtin rule catalog
// ---------------------------------------------------------------------------
//
// A curated set of high-impact CVEs for common network services. This
// provides out-of-the-box detection without requiring an internet connection
// or an external rule source. Patterns are written so their first digit run
// lands on the affected major version.

use crate::types::{Rule, Severity};

/// Return the builtin rule catalog.
///
/// Callers pass the returned slice to the matcher; nothing consults this set
/// implicitly, so tests can substitute their own rules.
pub fn builtin_rules() -> Vec<Rule> {
    vec![
        // -------------------------------------------------------------------
        // Apache Log4j
        // -------------------------------------------------------------------
        // Log4Shell: JNDI lookup remote code execution.
        rule(
            "CVE-2021-44228",
            "Apache Log4j",
            "2.0-beta9 to 2.14.1",
            Severity::Critical,
        ),
        // -------------------------------------------------------------------
        // Windows SMB
        // -------------------------------------------------------------------
        // EternalBlue: SMBv1 remote code execution.
        rule(
            "CVE-2017-0144",
            "Windows SMB",
            "Windows XP to Windows 8.1",
            Severity::Critical,
        ),
        // -------------------------------------------------------------------
        // OpenSSH
        // -------------------------------------------------------------------
        // Username enumeration via malformed authentication packet.
        rule("CVE-2018-15473", "OpenSSH", "7.2 to 7.7", Severity::Medium),
        // -------------------------------------------------------------------
        // Apache HTTP Server
        // -------------------------------------------------------------------
        // Path traversal and file disclosure in 2.4.49/2.4.50.
        rule("CVE-2021-41773", "Apache httpd", "2.4.49 to 2.4.50", Severity::High),
        // -------------------------------------------------------------------
        // nginx
        // -------------------------------------------------------------------
        // DNS resolver off-by-one heap write.
        rule("CVE-2021-23017", "nginx", "1.20.0 and earlier", Severity::High),
        // -------------------------------------------------------------------
        // vsftpd
        // -------------------------------------------------------------------
        // Backdoored 2.3.4 release tarball.
        rule("CVE-2011-2523", "vsftpd", "2.3.4", Severity::Critical),
        // -------------------------------------------------------------------
        // ProFTPD
        // -------------------------------------------------------------------
        // mod_copy unauthenticated remote file copy.
        rule("CVE-2015-3306", "ProFTPD", "1.3.5", Severity::Critical),
        // -------------------------------------------------------------------
        // Exim
        // -------------------------------------------------------------------
        // Remote command execution in the mail delivery process.
        rule("CVE-2019-10149", "Exim", "4.87 to 4.91", Severity::Critical),
        // -------------------------------------------------------------------
        // Redis
        // -------------------------------------------------------------------
        // Heap buffer overflow in networking.c.
        rule("CVE-2023-41056", "Redis", "7.0.0 to 7.0.14", Severity::High),
        // -------------------------------------------------------------------
        // MySQL
        // -------------------------------------------------------------------
        // Privilege escalation via malicious configuration.
        rule("CVE-2016-6662", "MySQL", "5.5 to 5.7", Severity::Critical),
        // -------------------------------------------------------------------
        // Elasticsearch
        // -------------------------------------------------------------------
        // Groovy scripting sandbox escape, remote code execution.
        rule("CVE-2015-1427", "Elasticsearch", "1.3.0 to 1.4.2", Severity::Critical),
    ]
}

// Helper: build a Rule.
fn rule(id: &str, product: &str, affected_versions: &str, severity: Severity) -> Rule {
    Rule {
        id: id.to_string(),
        product: product.to_string(),
        affected_versions: affected_versions.to_string(),
        severity,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::first_digit_run;

    #[test]
    fn builtin_rules_valid() {
        let rules = builtin_rules();
        assert!(rules.len() >= 10, "should have at least 10 builtin rules");
        for rule in &rules {
            assert!(rule.id.starts_with("CVE-"), "invalid CVE ID: {}", rule.id);
            assert!(!rule.product.is_empty(), "empty product for {}", rule.id);
            assert!(
                first_digit_run(&rule.affected_versions).is_some(),
                "pattern for {} has no digit run",
                rule.id
            );
        }
    }

    #[test]
    fn builtin_rules_ids_unique() {
        let rules = builtin_rules();
        for (i, a) in rules.iter().enumerate() {
            for b in &rules[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate rule id {}", a.id);
            }
        }
    }

    #[test]
    fn log4shell_rule_present() {
        let rules = builtin_rules();
        let rule = rules.iter().find(|r| r.id == "CVE-2021-44228").unwrap();
        assert_eq!(rule.product, "Apache Log4j");
        assert_eq!(rule.affected_versions, "2.0-beta9 to 2.14.1");
        assert_eq!(rule.severity, Severity::Critical);
    }

    #[test]
    fn eternalblue_rule_present() {
        let rules = builtin_rules();
        let rule = rules.iter().find(|r| r.id == "CVE-2017-0144").unwrap();
        assert_eq!(rule.product, "Windows SMB");
        assert_eq!(rule.affected_versions, "Windows XP to Windows 8.1");
        assert_eq!(rule.severity, Severity::Critical);
    }
}
