/// Card building: normalizing backend payloads into one view model
use crate::extension_data::{Catalog, Extension};

pub const NO_DESCRIPTION: &str = "No description";
pub const UNKNOWN: &str = "Unknown";

/// The single action a card offers.
#[derive(Debug, Clone, PartialEq)]
pub enum CardAction {
    /// Remove the named installed extension.
    Delete,
    /// Install from the catalog source location.
    Install { url: String },
}

/// Ephemeral view model for one rendered card.
///
/// Built fresh on every render pass; fallback text is already resolved so
/// the markup layer has no branching left to do.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub name: String,
    pub description: String,
    pub version: String,
    pub based_on: String,
    /// `Some(running)` for installed extensions, `None` for catalog entries
    /// (no indicator is shown for those).
    pub running: Option<bool>,
    pub action: CardAction,
}

impl Card {
    fn from_parts(
        name: &str,
        description: Option<&str>,
        version: Option<&str>,
        based_on: Option<&str>,
        running: Option<bool>,
        action: CardAction,
    ) -> Card {
        Card {
            name: name.to_string(),
            description: description.unwrap_or(NO_DESCRIPTION).to_string(),
            version: version.unwrap_or(UNKNOWN).to_string(),
            based_on: based_on.unwrap_or(UNKNOWN).to_string(),
            running,
            action,
        }
    }
}

/// Build cards for the installed tab, preserving the server-defined order.
pub fn installed_cards(extensions: &[Extension]) -> Vec<Card> {
    extensions
        .iter()
        .map(|ext| {
            Card::from_parts(
                &ext.name,
                ext.description.as_deref(),
                ext.version.as_deref(),
                ext.based_on.as_deref(),
                Some(ext.running),
                CardAction::Delete,
            )
        })
        .collect()
}

/// Build cards for the available tab in catalog iteration order.
pub fn catalog_cards(catalog: &Catalog) -> Vec<Card> {
    catalog
        .iter()
        .map(|(name, entry)| {
            Card::from_parts(
                name,
                entry.description.as_deref(),
                entry.version.as_deref(),
                entry.based_on.as_deref(),
                None,
                CardAction::Install {
                    url: entry.url.clone(),
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension_data::CatalogEntry;

    fn create_test_extension(name: &str, running: bool) -> Extension {
        Extension {
            name: name.to_string(),
            description: None,
            version: None,
            based_on: None,
            running,
            url: None,
        }
    }

    #[test]
    fn test_installed_cards_one_per_entry() {
        let extensions = vec![
            create_test_extension("alpha", true),
            create_test_extension("beta", false),
            create_test_extension("gamma", false),
        ];

        let cards = installed_cards(&extensions);

        assert_eq!(cards.len(), 3);
        // Server order is preserved
        assert_eq!(cards[0].name, "alpha");
        assert_eq!(cards[1].name, "beta");
        assert_eq!(cards[2].name, "gamma");
        for card in &cards {
            assert_eq!(card.action, CardAction::Delete);
        }
    }

    #[test]
    fn test_installed_card_fallbacks() {
        let extensions = vec![Extension {
            name: "foo".to_string(),
            description: None,
            version: Some("1.0".to_string()),
            based_on: None,
            running: true,
            url: None,
        }];

        let cards = installed_cards(&extensions);

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].name, "foo");
        assert_eq!(cards[0].running, Some(true));
        assert_eq!(cards[0].version, "1.0");
        assert_eq!(cards[0].description, NO_DESCRIPTION);
        assert_eq!(cards[0].based_on, UNKNOWN);
        assert_eq!(cards[0].action, CardAction::Delete);
    }

    #[test]
    fn test_catalog_cards_carry_install_action() {
        let mut catalog = Catalog::new();
        catalog.insert(
            "zeta".to_string(),
            CatalogEntry {
                description: Some("last".to_string()),
                version: None,
                based_on: Some("python".to_string()),
                url: "http://x/zeta.json".to_string(),
            },
        );
        catalog.insert(
            "alpha".to_string(),
            CatalogEntry {
                description: None,
                version: Some("0.3".to_string()),
                based_on: None,
                url: "http://x/alpha.json".to_string(),
            },
        );

        let cards = catalog_cards(&catalog);

        assert_eq!(cards.len(), 2);
        // Catalog iteration order is name-sorted
        assert_eq!(cards[0].name, "alpha");
        assert_eq!(
            cards[0].action,
            CardAction::Install {
                url: "http://x/alpha.json".to_string()
            }
        );
        assert_eq!(cards[0].running, None);
        assert_eq!(cards[1].name, "zeta");
        assert_eq!(cards[1].based_on, "python");
    }

    #[test]
    fn test_empty_inputs_make_no_cards() {
        assert!(installed_cards(&[]).is_empty());
        assert!(catalog_cards(&Catalog::new()).is_empty());
    }
}
