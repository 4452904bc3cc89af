use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static HOST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://(?:www\.)?([^/]+)").unwrap());

/// Job board a capture came from, classified by hostname.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    LinkedIn,
    Indeed,
    Glassdoor,
    Lever,
    Greenhouse,
    WaterlooWorks,
    Generic,
}

impl Site {
    pub fn detect(url: &str) -> Site {
        let Some(host) = HOST_RE.captures(url).map(|c| c[1].to_lowercase()) else {
            return Site::Generic;
        };

        if host.contains("linkedin.com") {
            Site::LinkedIn
        } else if host.contains("indeed.com") {
            Site::Indeed
        } else if host.contains("glassdoor.com") {
            Site::Glassdoor
        } else if host.contains("lever.co") {
            Site::Lever
        } else if host.contains("greenhouse.io") {
            Site::Greenhouse
        } else if host.contains("uwaterloo.ca") {
            Site::WaterlooWorks
        } else {
            Site::Generic
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Site::LinkedIn => "linkedin",
            Site::Indeed => "indeed",
            Site::Glassdoor => "glassdoor",
            Site::Lever => "lever",
            Site::Greenhouse => "greenhouse",
            Site::WaterlooWorks => "waterlooworks",
            Site::Generic => "generic",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_hosts() {
        assert_eq!(Site::detect("https://www.linkedin.com/jobs/view/1"), Site::LinkedIn);
        assert_eq!(Site::detect("https://ca.indeed.com/viewjob?jk=1"), Site::Indeed);
        assert_eq!(Site::detect("https://www.glassdoor.com/job/1"), Site::Glassdoor);
        assert_eq!(Site::detect("https://jobs.lever.co/acme/1"), Site::Lever);
        assert_eq!(Site::detect("https://boards.greenhouse.io/acme/1"), Site::Greenhouse);
        assert_eq!(
            Site::detect("https://waterlooworks.uwaterloo.ca/myAccount/co-op/direct/jobs.htm"),
            Site::WaterlooWorks
        );
    }

    #[test]
    fn unknown_hosts_are_generic() {
        assert_eq!(Site::detect("https://careers.example.com/1"), Site::Generic);
    }

    #[test]
    fn non_urls_are_generic() {
        assert_eq!(Site::detect(""), Site::Generic);
        assert_eq!(Site::detect("not a url"), Site::Generic);
    }

    #[test]
    fn path_does_not_leak_into_host_match() {
        assert_eq!(Site::detect("https://evil.example.com/linkedin.com"), Site::Generic);
    }
}
