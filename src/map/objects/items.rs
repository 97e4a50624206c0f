use uuid::Uuid;

use crate::map::position::Position;
use crate::map::terrain::{Colour, Symbol};

// Namespace for name-based item ids, so the same name at the same position always yields the same id
const ITEM_ID_NAMESPACE: Uuid = Uuid::from_u128(0x6b1d_4c2e_9f0a_4e57_8a3d_52c1_7e90_b4f3);

#[derive(Clone, PartialEq, Debug)]
pub enum ItemType {
    MeleeWeapon(MeleeWeapon),
    Armor(Armor),
    Potion,
    Grenade(Grenade),
    Generic
}

#[derive(Clone, PartialEq, Debug)]
pub struct MeleeWeapon {
    pub damage : String,
    pub damage_type : String
}

#[derive(Clone, PartialEq, Debug)]
pub struct Armor {
    pub armor_class : i32
}

#[derive(Clone, PartialEq, Debug)]
pub struct Grenade {
    pub explosive_power : i32
}

impl ItemType {
    pub fn name(&self) -> String {
        return match self {
            ItemType::MeleeWeapon(_) => { String::from("Melee Weapon") }
            ItemType::Armor(_) => { String::from("Armor") }
            ItemType::Potion => { String::from("Potion") }
            ItemType::Grenade(_) => { String::from("Grenade") }
            ItemType::Generic => { String::from("Item") }
        }
    }

    pub fn default_symbol(&self) -> char {
        match self {
            ItemType::MeleeWeapon(_) => '/',
            ItemType::Armor(_) => '[',
            ItemType::Potion => '!',
            ItemType::Grenade(_) => '*',
            ItemType::Generic => '?'
        }
    }

    /*
        The clause each specialised type adds to the base description, if any
     */
    fn describe_clause(&self) -> Option<String> {
        match self {
            ItemType::MeleeWeapon(weapon) => Some(format!("Damage: {} ({})", weapon.damage, weapon.damage_type)),
            ItemType::Armor(armor) => Some(format!("Armor Class: {}", armor.armor_class)),
            ItemType::Potion => Some(String::from("Effect: restores health")),
            ItemType::Grenade(grenade) => Some(format!("Explosive Power: {}", grenade.explosive_power)),
            ItemType::Generic => None
        }
    }
}

pub fn identity_key(name: &str, position: Position) -> String {
    format!("{}@{},{}", name, position.x, position.y)
}

pub fn build_item_id(name: &str, position: Position) -> Uuid {
    Uuid::new_v5(&ITEM_ID_NAMESPACE, identity_key(name, position).as_bytes())
}

#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    id : Uuid,
    identity : String,
    pub item_type: ItemType,
    name : String,
    description : String,
    pub symbol : Symbol,
    pub weight : f32,
    pub value : f32,
    rarity : String,
    position : Position
}

impl Item {
    pub fn new(item_type: ItemType, name: String, description: String, weight: f32, value: f32, rarity: String, position: Position) -> Item {
        let symbol = Symbol::new(item_type.default_symbol(), Colour::White);
        Item {
            id: build_item_id(&name, position),
            identity: identity_key(&name, position),
            item_type,
            name,
            description,
            symbol,
            weight,
            value,
            rarity,
            position
        }
    }

    /*
        Builds a plain ItemType::Generic item with no description or rarity
     */
    pub fn with_defaults(name: String, weight: f32, value: f32, position: Position) -> Item {
        Item::new(ItemType::Generic, name, String::new(), weight, value, String::from("Common"), position)
    }

    pub fn with_symbol(mut self, symbol: Symbol) -> Item {
        self.symbol = symbol;
        self
    }

    pub fn get_id(&self) -> Uuid {
        self.id
    }

    // Human readable form of the id, i.e "Sword@3,3"
    pub fn get_identity(&self) -> &str {
        &self.identity
    }

    pub fn get_name(&self) -> String {
        self.name.clone()
    }

    pub fn get_weight(&self) -> f32 {
        self.weight
    }

    pub fn get_value(&self) -> f32 {
        self.value
    }

    pub fn get_rarity(&self) -> String {
        self.rarity.clone()
    }

    // Where the item was placed on the map
    pub fn get_position(&self) -> Position {
        self.position
    }

    pub fn describe(&self) -> String {
        let base = if self.description.is_empty() {
            self.get_name()
        } else {
            format!("{} - {}", self.name, self.description)
        };

        match self.item_type.describe_clause() {
            Some(clause) => format!("{} | {}", base, clause),
            None => base
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::map::objects::items::{build_item_id, Armor, Grenade, Item, ItemType, MeleeWeapon};
    use crate::map::position::Position;

    fn build_sword(position: Position) -> Item {
        let weapon = MeleeWeapon { damage: String::from("2-6"), damage_type: String::from("slashing") };
        Item::new(ItemType::MeleeWeapon(weapon), String::from("Sword"), String::from("A short steel blade."), 3.0, 15.0, String::from("Common"), position)
    }

    #[test]
    fn test_build_item() {
        let item = Item::with_defaults("Test Item".to_owned(), 1.0, 2.0, Position::new(4, 5));
        assert_eq!(ItemType::Generic, item.item_type);
        assert_eq!("Test Item", item.get_name());
        assert_eq!('?', item.symbol.character);
        assert_eq!(1.0, item.get_weight());
        assert_eq!(2.0, item.get_value());
        assert_eq!(Position::new(4, 5), item.get_position());
    }

    #[test]
    fn test_identity_is_derived_from_name_and_position() {
        let a = build_sword(Position::new(3, 3));
        let b = build_sword(Position::new(3, 3));
        let c = build_sword(Position::new(3, 4));

        assert_eq!("Sword@3,3", a.get_identity());
        assert_eq!(build_item_id("Sword", Position::new(3, 3)), a.get_id());
        // Same name and position collide
        assert_eq!(a.get_id(), b.get_id());
        assert_ne!(a.get_id(), c.get_id());
    }

    #[test]
    fn test_describe_melee_weapon() {
        let sword = build_sword(Position::zero());
        assert_eq!("Sword - A short steel blade. | Damage: 2-6 (slashing)", sword.describe());
    }

    #[test]
    fn test_describe_variants() {
        let armor = Item::new(ItemType::Armor(Armor { armor_class: 4 }), String::from("Chainmail"), String::from("Rings of iron."), 20.0, 60.0, String::from("Uncommon"), Position::zero());
        assert_eq!("Chainmail - Rings of iron. | Armor Class: 4", armor.describe());

        let potion = Item::new(ItemType::Potion, String::from("Red Potion"), String::from("Smells of berries."), 0.5, 10.0, String::from("Common"), Position::zero());
        assert_eq!("Red Potion - Smells of berries. | Effect: restores health", potion.describe());

        let grenade = Item::new(ItemType::Grenade(Grenade { explosive_power: 12 }), String::from("Grenade"), String::from("Handle with care."), 1.0, 25.0, String::from("Rare"), Position::zero());
        assert_eq!("Grenade - Handle with care. | Explosive Power: 12", grenade.describe());

        let rope = Item::new(ItemType::Generic, String::from("Rope"), String::from("Fifty feet of hemp."), 2.0, 1.0, String::from("Common"), Position::zero());
        assert_eq!("Rope - Fifty feet of hemp.", rope.describe());
    }
}
