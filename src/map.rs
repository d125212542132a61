use std::fmt;

use crate::bubble::BUBBLE_TOP_LEFT;
use crate::joypad::{BINARY_ONE, CTRL_1_PORT};
use crate::memory::registers::*;
use crate::memory::*;
use crate::video::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Byte(Byte),
    Mask(u8),
    Address(Address),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Byte(byte) => write!(f, "{}", byte),
            Value::Mask(bits) => write!(f, "%{:08b}", bits),
            Value::Address(address) => write!(f, "{}", address),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub group: &'static str,
    pub name: String,
    // Name of the same constant in the game's assembler include file
    pub symbol: Option<String>,
    pub value: Value,
}

impl Entry {
    fn new(group: &'static str, name: &str, value: Value) -> Entry {
        Entry {
            group,
            name: name.to_string(),
            symbol: None,
            value,
        }
    }

    fn with_symbol(mut self, symbol: &str) -> Entry {
        self.symbol = Some(symbol.to_string());
        self
    }
}

// Same grouping and order as the game's include file
pub fn entries() -> Vec<Entry> {
    let mut entries = vec![
        Entry::new("apu reset and stack", "APU_RESET", Value::Byte(APU_RESET)).with_symbol("APU_RESET"),
        Entry::new("apu reset and stack", "STACK_INIT", Value::Byte(STACK_INIT)).with_symbol("STACK_INIT"),
        Entry::new("apu reset and stack", "NMI_ENABLE", Value::Mask(NMI_ENABLE.bits())).with_symbol("NMI_ENABLE"),
        Entry::new("apu reset and stack", "SPRITE_ENABLE", Value::Mask(SPRITE_ENABLE.bits())).with_symbol("SPRT_ENBLE"),
        Entry::new("background", "BG_PORT", Value::Byte(BG_PORT)).with_symbol("BG_PORT"),
        Entry::new("palette", "PALETTE_PORT", Value::Byte(PALETTE_PORT)).with_symbol("PLTTE_PORT"),
        Entry::new("palette", "PALETTE_SIZE", Value::Byte(PALETTE_SIZE)).with_symbol("PLTTE_SIZE"),
        Entry::new("attributes", "ATTR_HI_PORT", Value::Byte(ATTR_HI_PORT)).with_symbol("ATTR_APORT"),
        Entry::new("attributes", "ATTR_LO_PORT", Value::Byte(ATTR_LO_PORT)).with_symbol("ATTR_BPORT"),
        Entry::new("attributes", "ATTR_SIZE", Value::Byte(ATTR_SIZE)).with_symbol("ATTRB_SIZE"),
        Entry::new("sprites", "SPRITE_RAM", Value::Address(SPRITE_RAM)).with_symbol("SPRITE_RAM"),
        Entry::new("sprites", "SPRITE_SIZE", Value::Byte(SPRITE_SIZE)).with_symbol("SPRITE_SIZE"),
        Entry::new("sprites", "SPRITE_LOW", Value::Byte(SPRITE_LOW)).with_symbol("SPRITE_LOW"),
        Entry::new("sprites", "SPRITE_HI", Value::Byte(SPRITE_HI)).with_symbol("SPRITE_HI"),
        Entry::new("sprites", "NMI_LO_ADDR", Value::Address(NMI_LO_ADDR)).with_symbol("NMI_LO_ADDR"),
        Entry::new("sprites", "NMI_HI_ADDR", Value::Address(NMI_HI_ADDR)).with_symbol("NMI_HI_ADDR"),
        Entry::new("controller input", "CTRL_1_PORT", Value::Byte(CTRL_1_PORT)).with_symbol("CTRL_1_PORT"),
        Entry::new("controller input", "BINARY_ONE", Value::Mask(BINARY_ONE.bits())).with_symbol("BINARY_ONE"),
    ];

    for (i, corner) in BUBBLE_TOP_LEFT.iter().enumerate() {
        let n = i + 1;
        entries.push(
            Entry::new("bubbles", &format!("BUBBLE_{}_TOP_Y", n), Value::Address(corner.y))
                .with_symbol(&format!("BBLE_TL_Y_{}", n)),
        );
        entries.push(
            Entry::new("bubbles", &format!("BUBBLE_{}_TOP_X", n), Value::Address(corner.x))
                .with_symbol(&format!("BBLE_TL_X_{}", n)),
        );
    }

    entries
}

pub fn registers() -> Vec<Entry> {
    [
        ("PPUCTRL", PPUCTRL),
        ("PPUMASK", PPUMASK),
        ("PPUSTATUS", PPUSTATUS),
        ("OAMADDR", OAMADDR),
        ("OAMDATA", OAMDATA),
        ("PPUSCROLL", PPUSCROLL),
        ("PPUADDR", PPUADDR),
        ("PPUDATA", PPUDATA),
        ("SPRITEDMA", SPRITEDMA),
        ("APU_STATUS", APU_STATUS),
        ("JOYPAD1", JOYPAD1),
        ("APU_FRAME_COUNTER", APU_FRAME_COUNTER),
    ]
    .into_iter()
    .map(|(name, address)| Entry::new("registers", name, Value::Address(address)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_constant_is_listed_once() {
        let entries = entries();
        assert_eq!(entries.len(), 18 + 12);

        let names: HashSet<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names.len(), entries.len());
    }

    #[test]
    fn every_constant_keeps_its_assembler_symbol() {
        let entries = entries();
        let symbols: HashSet<_> = entries.iter().filter_map(|e| e.symbol.as_deref()).collect();
        assert_eq!(symbols.len(), entries.len());

        let symbol_of = |name: &str| entries.iter().find(|e| e.name == name).and_then(|e| e.symbol.clone());
        assert_eq!(symbol_of("SPRITE_ENABLE").as_deref(), Some("SPRT_ENBLE"));
        assert_eq!(symbol_of("PALETTE_PORT").as_deref(), Some("PLTTE_PORT"));
        assert_eq!(symbol_of("ATTR_HI_PORT").as_deref(), Some("ATTR_APORT"));
        assert_eq!(symbol_of("ATTR_LO_PORT").as_deref(), Some("ATTR_BPORT"));
        assert_eq!(symbol_of("ATTR_SIZE").as_deref(), Some("ATTRB_SIZE"));
        assert_eq!(symbol_of("BUBBLE_1_TOP_Y").as_deref(), Some("BBLE_TL_Y_1"));
        assert_eq!(symbol_of("BUBBLE_6_TOP_X").as_deref(), Some("BBLE_TL_X_6"));
    }

    #[test]
    fn registers_have_no_assembler_symbol() {
        assert!(registers().iter().all(|e| e.symbol.is_none()));
    }

    #[test]
    fn bubble_entries_alternate_y_then_x() {
        let entries = entries();
        let bubbles: Vec<_> = entries.iter().filter(|e| e.group == "bubbles").collect();

        assert_eq!(bubbles[0].name, "BUBBLE_1_TOP_Y");
        assert_eq!(bubbles[0].value, Value::Address(Address(0x0300)));
        assert_eq!(bubbles[11].name, "BUBBLE_6_TOP_X");
        assert_eq!(bubbles[11].value, Value::Address(Address(0x0317)));
    }

    #[test]
    fn values_render_like_assembler_literals() {
        assert_eq!(Value::Byte(ATTR_LO_PORT).to_string(), "$c0");
        assert_eq!(Value::Mask(SPRITE_ENABLE.bits()).to_string(), "%00011110");
        assert_eq!(Value::Address(NMI_HI_ADDR).to_string(), "$4014");
    }

    #[test]
    fn register_table_has_no_duplicates() {
        let registers = registers();
        let addresses: HashSet<_> = registers.iter().map(|e| e.value.to_string()).collect();
        assert_eq!(addresses.len(), registers.len());
    }
}
