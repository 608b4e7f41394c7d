/// Lowercases `title` and collapses every run of characters outside
/// `[a-z0-9]` into a single hyphen, with no leading or trailing hyphen.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut gap = false;

    for ch in title.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() {
            if gap && !slug.is_empty() {
                slug.push('-');
            }
            gap = false;
            slug.push(ch);
        }
        else {
            gap = true;
        }
    }
    slug
}

/// `{base_url}{slug}-{event_id}`, or `{base_url}{event_id}` when the title
/// has nothing to slug.
pub fn share_link(base_url: &str, title: &str, event_id: &str) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        format!("{base_url}{event_id}")
    }
    else {
        format!("{base_url}{slug}-{event_id}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("HackMIT 2025"), "hackmit-2025");
        assert_eq!(slugify("Art & Culture Exhibition"), "art-culture-exhibition");
        assert_eq!(slugify("  --Hello,   World!--  "), "hello-world");
        assert_eq!(slugify("Café Night"), "caf-night");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_share_link() {
        assert_eq!(
            share_link("https://eventsify.app/event/", "HackMIT 2025", "event-002"),
            "https://eventsify.app/event/hackmit-2025-event-002"
        );
        assert_eq!(
            share_link("https://eventsify.app/event/", "***", "event-003"),
            "https://eventsify.app/event/event-003"
        );
    }
}
