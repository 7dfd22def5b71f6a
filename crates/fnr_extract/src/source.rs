/// Derives a human-readable brand name from a URL's domain:
/// `https://www.some-news-site.com/story` becomes `"Some News Site"`.
///
/// This is the canonical `source` value when page markup carries no
/// site-name or publisher metadata.
pub fn source_name_from_url(url: &str) -> String {
    let domain = bare_domain(url);

    // Take the label immediately before the TLD; a bare host without a
    // dot is used as-is.
    let labels: Vec<&str> = domain.split('.').collect();
    let label = if labels.len() >= 2 {
        labels[labels.len() - 2]
    } else {
        domain
    };

    title_case(&label.replace(['-', '_'], " "))
}

/// Strips the scheme, a leading `www.`, the path, and any port.
fn bare_domain(url: &str) -> &str {
    let trimmed = url.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    let without_www = without_scheme.strip_prefix("www.").unwrap_or(without_scheme);
    let host = without_www.split('/').next().unwrap_or(without_www);
    host.split(':').next().unwrap_or(host)
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphenated_domain() {
        assert_eq!(
            source_name_from_url("https://www.some-news-site.com/article/1"),
            "Some News Site"
        );
    }

    #[test]
    fn test_plain_domain() {
        assert_eq!(source_name_from_url("https://nytimes.com/2024/story"), "Nytimes");
        assert_eq!(source_name_from_url("http://www.clarin.com"), "Clarin");
    }

    #[test]
    fn test_underscores_and_port() {
        assert_eq!(source_name_from_url("http://local_news.example.org:8080/x"), "Example");
        assert_eq!(source_name_from_url("https://daily_planet.net"), "Daily Planet");
    }

    #[test]
    fn test_no_scheme() {
        assert_eq!(source_name_from_url("www.the-guardian.co"), "The Guardian");
    }

    #[test]
    fn test_bare_host() {
        assert_eq!(source_name_from_url("localhost"), "Localhost");
    }
}
