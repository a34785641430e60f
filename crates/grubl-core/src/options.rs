//! Fixed catalogs offered by the search form and used when rendering cards.

/// A selectable place type: display label plus the places API type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceTypeOption {
    pub label: &'static str,
    pub code: &'static str,
}

pub const PLACE_TYPE_OPTIONS: &[PlaceTypeOption] = &[
    PlaceTypeOption {
        label: "Restaurant",
        code: "restaurant",
    },
    PlaceTypeOption {
        label: "Cafe",
        code: "cafe",
    },
    PlaceTypeOption {
        label: "Coffee Shop",
        code: "coffee_shop",
    },
    PlaceTypeOption {
        label: "Fast Food",
        code: "fast_food_restaurant",
    },
    PlaceTypeOption {
        label: "Bakery",
        code: "bakery",
    },
    PlaceTypeOption {
        label: "Bar",
        code: "bar",
    },
    PlaceTypeOption {
        label: "Food Court",
        code: "food_court",
    },
    PlaceTypeOption {
        label: "Takeaway",
        code: "meal_takeaway",
    },
];

/// Supported search radii in meters.
pub const RADIUS_OPTIONS: [u32; 4] = [200, 400, 800, 1600];

/// Emoji shown for a venue's primary type and used to pick tag chips.
const TYPE_EMOJI: &[(&str, &str)] = &[
    ("restaurant", "🍽️"),
    ("cafe", "☕"),
    ("coffee_shop", "☕"),
    ("fast_food_restaurant", "🍔"),
    ("bakery", "🥐"),
    ("bar", "🍺"),
    ("food_court", "🍱"),
    ("meal_takeaway", "🥡"),
    ("pizza_restaurant", "🍕"),
    ("hamburger_restaurant", "🍔"),
    ("sushi_restaurant", "🍣"),
    ("ramen_restaurant", "🍜"),
    ("chinese_restaurant", "🥢"),
    ("japanese_restaurant", "🍱"),
    ("korean_restaurant", "🍲"),
    ("thai_restaurant", "🍛"),
    ("indian_restaurant", "🍛"),
    ("italian_restaurant", "🍝"),
    ("mexican_restaurant", "🌮"),
    ("seafood_restaurant", "🦐"),
    ("steak_house", "🥩"),
    ("vegetarian_restaurant", "🥗"),
    ("vegan_restaurant", "🥗"),
    ("breakfast_restaurant", "🍳"),
    ("brunch_restaurant", "🥞"),
    ("dessert_shop", "🍰"),
    ("ice_cream_shop", "🍦"),
    ("sandwich_shop", "🥪"),
    ("pub", "🍻"),
    ("wine_bar", "🍷"),
];

/// Types too generic to be worth a tag on the card.
pub const IGNORED_PLACE_TYPES: &[&str] = &[
    "restaurant",
    "food",
    "point_of_interest",
    "establishment",
    "store",
];

pub const FALLBACK_EMOJI: &str = "🍴";

/// Looks up a place type code in the catalog.
#[must_use]
pub fn place_type_option(code: &str) -> Option<&'static PlaceTypeOption> {
    PLACE_TYPE_OPTIONS.iter().find(|opt| opt.code == code)
}

/// Emoji for a type code, if it has one.
#[must_use]
pub fn emoji_for(code: &str) -> Option<&'static str> {
    TYPE_EMOJI
        .iter()
        .find(|(t, _)| *t == code)
        .map(|(_, emoji)| *emoji)
}

/// `fast_food_restaurant` -> `Fast Food Restaurant`.
#[must_use]
pub fn humanize_type(code: &str) -> String {
    code.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_form_option_has_an_emoji() {
        for opt in PLACE_TYPE_OPTIONS {
            assert!(emoji_for(opt.code).is_some(), "{} has no emoji", opt.code);
        }
    }

    #[test]
    fn humanize_type_title_cases_words() {
        assert_eq!(humanize_type("fast_food_restaurant"), "Fast Food Restaurant");
        assert_eq!(humanize_type("bar"), "Bar");
        assert_eq!(humanize_type(""), "");
    }

    #[test]
    fn place_type_option_lookup() {
        assert_eq!(place_type_option("cafe").map(|o| o.label), Some("Cafe"));
        assert!(place_type_option("gas_station").is_none());
    }
}
