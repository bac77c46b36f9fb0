//! The menu data model. Items are constructed once from the fixed house
//! tables and are read-only for the lifetime of a render pass.

/// A dish on the food side of the menu
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub name: String,
    /// Free-form ingredient list, wrapped at render time
    pub description: String,
    /// Price in euro. Not validated; whatever is here gets printed
    pub price: f64,
    /// Filename key into the images directory, if the item has artwork
    pub image: Option<String>,
}

impl MenuItem {
    pub fn new(name: &str, description: &str, price: f64, image: Option<&str>) -> MenuItem {
        MenuItem {
            name: name.to_string(),
            description: description.to_string(),
            price,
            image: image.map(str::to_string),
        }
    }
}

/// A drink: just a name and a price
#[derive(Debug, Clone, PartialEq)]
pub struct BeverageItem {
    pub name: String,
    pub price: f64,
}

impl BeverageItem {
    pub fn new(name: &str, price: f64) -> BeverageItem {
        BeverageItem {
            name: name.to_string(),
            price,
        }
    }
}

/// The two ordered sections of the menu. Insertion order is layout order.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub food: Vec<MenuItem>,
    pub beverages: Vec<BeverageItem>,
}

impl Menu {
    /// The fixed house menu of Pizzeria La Repubblica
    pub fn house() -> Menu {
        let food = vec![
            MenuItem::new(
                "Margherita",
                "Pomodoro DOP, mozzarella fior di latte, basilico fresco",
                6.50,
                Some("margherita.png"),
            ),
            MenuItem::new(
                "Marinara",
                "Pomodoro, aglio, origano, olio extra vergine d'oliva",
                5.00,
                Some("marinara.png"),
            ),
            MenuItem::new(
                "Diavola",
                "Pomodoro, mozzarella, salame piccante, pepe",
                8.50,
                Some("diavola.png"),
            ),
            MenuItem::new(
                "Quattro Formaggi",
                "Mozzarella, gorgonzola, parmigiano, provola",
                9.50,
                Some("quattro_formaggi.png"),
            ),
            MenuItem::new(
                "Capricciosa",
                "Pomodoro, mozzarella, prosciutto cotto, funghi, carciofi, olive",
                9.00,
                Some("capricciosa.png"),
            ),
            MenuItem::new(
                "Prosciutto e Funghi",
                "Pomodoro, mozzarella, prosciutto crudo, funghi porcini",
                9.50,
                Some("prosciutto_e_funghi.png"),
            ),
            MenuItem::new(
                "Bufalina",
                "Mozzarella di bufala, pomodoro fresco, basilico",
                10.00,
                Some("bufalina.png"),
            ),
            MenuItem::new(
                "Ortolana",
                "Verdure grigliate, mozzarella, basilico, pomodoro",
                8.50,
                Some("ortolana.png"),
            ),
            MenuItem::new(
                "Tonno e Cipolla",
                "Pomodoro, mozzarella, tonno, cipolla rossa",
                8.00,
                Some("tonno_e_cipolla.png"),
            ),
            MenuItem::new(
                "Frutti di Mare",
                "Pomodoro, mozzarella, gamberi, calamari, cozze",
                11.00,
                Some("frutti_di_mare.png"),
            ),
            MenuItem::new(
                "Napoli",
                "Pomodoro, mozzarella, acciughe, capperi",
                7.50,
                Some("napoli.png"),
            ),
            MenuItem::new(
                "Siciliana",
                "Pomodoro, ricotta salata, melanzane, basilico",
                9.00,
                Some("siciliana.png"),
            ),
        ];

        let beverages = vec![
            BeverageItem::new("Acqua naturale 0.5L", 2.00),
            BeverageItem::new("Acqua frizzante 0.5L", 2.00),
            BeverageItem::new("Coca-Cola 33cl", 3.00),
            BeverageItem::new("Aranciata 33cl", 3.00),
            BeverageItem::new("Birra bionda 33cl", 4.00),
            BeverageItem::new("Birra artigianale 50cl", 5.50),
            BeverageItem::new("Birra alla spina 40cl", 4.50),
            BeverageItem::new("Vino rosso della casa (bicchiere)", 4.00),
            BeverageItem::new("Vino bianco della casa (bicchiere)", 4.00),
            BeverageItem::new("Chianti Classico DOC (bottiglia)", 18.00),
            BeverageItem::new("Prosecco DOC (bottiglia)", 20.00),
        ];

        Menu { food, beverages }
    }
}

/// Render a price with the house currency symbol and exactly two fraction
/// digits, whatever the input's precision
pub fn format_price(price: f64) -> String {
    format!("€ {price:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn prices_always_carry_two_fraction_digits() {
        assert_eq!(format_price(5.0), "€ 5.00");
        assert_eq!(format_price(4.5), "€ 4.50");
        assert_eq!(format_price(18.0), "€ 18.00");
    }

    #[test]
    fn malformed_prices_render_literally() {
        // no validation by design
        assert_eq!(format_price(-1.0), "€ -1.00");
    }

    #[test]
    fn house_menu_has_the_full_card() {
        let menu = Menu::house();
        assert_eq!(menu.food.len(), 12);
        assert_eq!(menu.beverages.len(), 11);
    }

    #[test]
    fn house_item_names_are_distinct() {
        let menu = Menu::house();
        let names: HashSet<_> = menu
            .food
            .iter()
            .map(|i| i.name.as_str())
            .chain(menu.beverages.iter().map(|b| b.name.as_str()))
            .collect();
        assert_eq!(names.len(), menu.food.len() + menu.beverages.len());
    }

    #[test]
    fn every_dish_references_artwork() {
        for item in Menu::house().food {
            let image = item.image.expect("house dishes all have image keys");
            assert!(image.ends_with(".png"));
        }
    }
}
