use arch::reg::Reg;
use indexmap::{map::Entry, IndexMap};
use strum::IntoEnumIterator;

use crate::parser::Line;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ident {
    Predefined,
    Label(Line),
    Variable,
}

/// Symbol name -> address. Bindings are never replaced.
#[derive(Debug, Clone)]
pub struct SymbolTable(IndexMap<String, (Ident, u16)>);

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable(
            Reg::iter()
                .map(|reg| (reg.to_string(), (Ident::Predefined, reg.addr())))
                .collect(),
        )
    }

    /// Bind `name` unless it is already bound.
    /// On conflict the table is left untouched and the existing entry is returned.
    pub fn insert(&mut self, name: &str, kind: Ident, value: u16) -> Result<(), (Ident, u16)> {
        match self.0.entry(name.to_string()) {
            Entry::Occupied(entry) => Err(entry.get().clone()),
            Entry::Vacant(entry) => {
                entry.insert((kind, value));
                Ok(())
            }
        }
    }

    /// Address bound to `name`. When unbound, `alloc` supplies the address
    /// and `name` is bound to it as `kind`.
    pub fn get_or_insert_with<E>(
        &mut self,
        name: &str,
        kind: Ident,
        alloc: impl FnOnce() -> Result<u16, E>,
    ) -> Result<u16, E> {
        match self.0.entry(name.to_string()) {
            Entry::Occupied(entry) => Ok(entry.get().1),
            Entry::Vacant(entry) => {
                let value = alloc()?;
                entry.insert((kind, value));
                Ok(value)
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&(Ident, u16)> {
        self.0.get(name)
    }

    pub fn get_val(&self, name: &str) -> Option<u16> {
        self.0.get(name).map(|(_, val)| *val)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in binding order: predefined, labels, then variables.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Ident, u16)> {
        self.0
            .iter()
            .map(|(name, (kind, val))| (name.as_str(), kind, *val))
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predefined() {
        let table = SymbolTable::new();
        assert_eq!(table.len(), 23);
        assert_eq!(table.get_val("SP"), Some(0));
        assert_eq!(table.get_val("R0"), Some(0));
        assert_eq!(table.get_val("THAT"), Some(4));
        assert_eq!(table.get_val("R13"), Some(13));
        assert_eq!(table.get_val("SCREEN"), Some(16384));
        assert_eq!(table.get_val("KBD"), Some(24576));
        assert_eq!(table.get(""), None);
        assert!(!table.contains("screen"));
    }

    #[test]
    fn test_first_wins() {
        let mut table = SymbolTable::new();
        let first = Line::new(0, "(LOOP)");
        assert_eq!(table.insert("LOOP", Ident::Label(first.clone()), 7), Ok(()));
        assert_eq!(
            table.insert("LOOP", Ident::Label(Line::new(5, "(LOOP)")), 9),
            Err((Ident::Label(first), 7))
        );
        assert_eq!(table.get_val("LOOP"), Some(7));
    }

    #[test]
    fn test_predefined_not_rebound() {
        let mut table = SymbolTable::new();
        assert_eq!(
            table.insert("KBD", Ident::Variable, 16),
            Err((Ident::Predefined, 24576))
        );
        assert_eq!(table.get_val("KBD"), Some(24576));
    }

    #[test]
    fn test_get_or_insert_with() {
        let mut table = SymbolTable::new();
        let mut next = 16;
        let mut alloc = || -> Result<u16, ()> {
            next += 1;
            Ok(next - 1)
        };
        assert_eq!(table.get_or_insert_with("i", Ident::Variable, &mut alloc), Ok(16));
        assert_eq!(table.get_or_insert_with("i", Ident::Variable, &mut alloc), Ok(16));
        assert_eq!(table.get_or_insert_with("R2", Ident::Variable, &mut alloc), Ok(2));
        assert_eq!(table.get_or_insert_with("j", Ident::Variable, &mut alloc), Ok(17));
        assert_eq!(table.get("j"), Some(&(Ident::Variable, 17)));
        assert_eq!(
            table.get_or_insert_with("k", Ident::Variable, || Err("full")),
            Err("full")
        );
        assert!(!table.contains("k"));
    }

    #[test]
    fn test_order() {
        let mut table = SymbolTable::new();
        table.insert("END", Ident::Label(Line::new(0, "(END)")), 3).unwrap();
        table.insert("i", Ident::Variable, 16).unwrap();
        let tail: Vec<(&str, u16)> = table.iter().skip(23).map(|(name, _, val)| (name, val)).collect();
        assert_eq!(tail, vec![("END", 3), ("i", 16)]);
    }
}
