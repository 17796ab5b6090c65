use crate::core::Item;
use crate::render::item::render_item;

/// Separator between rendered item blocks
pub const ITEM_SEPARATOR: &str = "\n------\n\n";

/// Links embedded in the disclaimer footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyStyle {
    /// Where the bot's source lives
    pub bot_url: String,

    /// New-issue URL for reporting wrong item data, without the `title` parameter
    pub issue_url: String,
}

impl Default for ReplyStyle {
    fn default() -> Self {
        Self {
            bot_url: "https://github.com/lukeschaefer/DeadlockBot".to_string(),
            issue_url: "https://github.com/lukeschaefer/Deadlock-Content/issues/new\
                ?assignees=&labels=&projects=&template=incorrect-item-details.md"
                .to_string(),
        }
    }
}

/// Keep ASCII letters and digits only
pub fn sanitize_item_name(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Footer naming the bot and linking an issue report for `item`
pub fn render_disclaimer(item: &Item, style: &ReplyStyle) -> String {
    let title = format!("Item correction for {}", sanitize_item_name(&item.name));

    format!(
        "\n  \n-----\n\
         ^This ^response ^was ^automatically ^made ^by [^a ^bot]({}) ^- ^if ^it's ^incorrect ^send ^a ^DM!  \n\
         ^Or ^alternatively ^file ^an ^issue ^[here]({}&title={})",
        style.bot_url,
        style.issue_url,
        urlencoding::encode(&title)
    )
}

/// Join rendered items and append one disclaimer for the first item.
///
/// Returns `None` for an empty list: no reply should be posted at all.
pub fn compose_reply(items: &[&Item], style: &ReplyStyle) -> Option<String> {
    let first = items.first()?;

    let blocks: Vec<String> = items.iter().map(|item| render_item(item)).collect();
    let mut reply = blocks.join(ITEM_SEPARATOR);
    reply.push_str(&render_disclaimer(first, style));

    Some(reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_item_name() {
        assert_eq!(sanitize_item_name("Tesla Bolt"), "TeslaBolt");
        assert_eq!(sanitize_item_name("Kinetic-Dash (T2)"), "KineticDashT2");
        assert_eq!(sanitize_item_name("Él Mañana"), "lMaana");
    }

    #[test]
    fn test_empty_list_composes_nothing() {
        assert!(compose_reply(&[], &ReplyStyle::default()).is_none());
    }

    #[test]
    fn test_single_item_embeds_name_once() {
        let item = Item::new("Tesla Bolt", 500);
        let reply = compose_reply(&[&item], &ReplyStyle::default()).unwrap();

        assert!(reply.starts_with("### Tesla Bolt  ($500)\n"));
        assert_eq!(reply.matches("TeslaBolt").count(), 1);
        assert!(reply.ends_with("&title=Item%20correction%20for%20TeslaBolt)"));
        assert!(!reply.contains(ITEM_SEPARATOR));
    }

    #[test]
    fn test_disclaimer_uses_first_item_only() {
        let first = Item::new("Burst Fire", 3000);
        let second = Item::new("Tesla Bolt", 500);
        let reply = compose_reply(&[&first, &second], &ReplyStyle::default()).unwrap();

        assert_eq!(reply.matches(ITEM_SEPARATOR).count(), 1);
        assert_eq!(reply.matches("^This ^response").count(), 1);
        assert!(reply.contains("for%20BurstFire"));
        assert!(!reply.contains("TeslaBolt"));
    }

    #[test]
    fn test_disclaimer_text() {
        let style = ReplyStyle {
            bot_url: "https://example.org/bot".to_string(),
            issue_url: "https://example.org/issues/new?template=x.md".to_string(),
        };
        let disclaimer = render_disclaimer(&Item::new("Tesla Bolt", 500), &style);

        let expected = "\n  \n-----\n\
            ^This ^response ^was ^automatically ^made ^by [^a ^bot](https://example.org/bot) \
            ^- ^if ^it's ^incorrect ^send ^a ^DM!  \n\
            ^Or ^alternatively ^file ^an ^issue \
            ^[here](https://example.org/issues/new?template=x.md&title=Item%20correction%20for%20TeslaBolt)";
        assert_eq!(disclaimer, expected);
    }
}
