// Choosing which configured network to join from a scan

/// A network the firmware was built to join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub ssid: &'static str,
    pub password: &'static str,
}

/// Pick a candidate for the visible SSIDs, in scan order.
///
/// Every visible SSID that matches a candidate replaces the previous
/// choice, so the last match in scan order wins.
pub fn select_network<'a, I, S>(candidates: &'a [Candidate], visible: I) -> Option<&'a Candidate>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut chosen = None;
    for ssid in visible {
        for candidate in candidates {
            if candidate.ssid == ssid.as_ref() {
                chosen = Some(candidate);
            }
        }
    }
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;

    const NETWORKS: &[Candidate] = &[
        Candidate { ssid: "home", password: "pw1" },
        Candidate { ssid: "shop", password: "pw2" },
    ];

    #[test]
    fn test_no_match() {
        assert_eq!(select_network(NETWORKS, ["cafe", "airport"]), None);
        assert_eq!(select_network(NETWORKS, Vec::<String>::new()), None);
    }

    #[test]
    fn test_single_match() {
        let chosen = select_network(NETWORKS, ["cafe", "shop"]).unwrap();
        assert_eq!(chosen.password, "pw2");
    }

    #[test]
    fn test_last_match_in_scan_order_wins() {
        let chosen = select_network(NETWORKS, ["shop", "cafe", "home"]).unwrap();
        assert_eq!(chosen.ssid, "home");

        let chosen = select_network(NETWORKS, ["home", "shop"]).unwrap();
        assert_eq!(chosen.ssid, "shop");
    }
}
