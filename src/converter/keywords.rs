/// Lowercase keyword found in a post body, and the tags it contributes.
pub(super) static KEYWORD_TAGS: &[(&str, &[&str])] = &[
    ("openbsd", &["openbsd", "bsd", "unix"]),
    ("freebsd", &["freebsd", "bsd", "unix"]),
    ("wireguard", &["wireguard", "vpn", "networking"]),
    ("docker", &["docker", "containers", "devops"]),
    ("dns", &["dns", "networking"]),
    ("dhcp", &["dhcp", "networking"]),
    ("firewall", &["firewall", "security", "networking"]),
    ("iptables", &["iptables", "firewall", "networking"]),
    ("vpn", &["vpn", "networking", "security"]),
    ("vps", &["vps", "hosting", "cloud"]),
    ("ssh", &["ssh", "security"]),
    ("nginx", &["nginx", "web-server"]),
    ("apache", &["apache", "web-server"]),
    ("lxc", &["lxc", "containers"]),
    ("samba", &["samba", "file-sharing"]),
    ("nat", &["nat", "networking"]),
    ("vlan", &["vlan", "networking"]),
    ("tunnel", &["tunnel", "networking"]),
    ("debugging", &["debugging", "troubleshooting"]),
    ("backup", &["backup", "storage"]),
    ("ubuntu", &["ubuntu", "linux"]),
    ("nixos", &["nixos", "linux"]),
];

/// Tags added when any of the listed substrings shows up, independent of the table above.
pub(super) static HEURISTIC_TAGS: &[(&str, &[&str])] = &[
    ("tutorial", &["tutorial", "setup", "guide"]),
    ("debugging", &["debug", "troubleshoot"]),
    ("architecture", &["architecture", "design"]),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_keywords_are_unique_and_lowercase() {
        let mut seen = HashSet::new();
        for (keyword, tags) in KEYWORD_TAGS {
            assert!(seen.insert(*keyword), "duplicate keyword {keyword}");
            assert_eq!(*keyword, keyword.to_lowercase());
            assert!(!tags.is_empty());
        }
    }
}
