//! TableFile type - the document held in one file

use crate::error::{Error, Result};
use crate::sheet::Sheet;
use crate::MAX_SHEET_NAME_LEN;

/// A table file's contents: zero or more named sheets, in creation order.
#[derive(Debug, Clone, Default)]
pub struct TableFile {
    sheets: Vec<Sheet>,
}

impl TableFile {
    /// Create an empty table with no sheets
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the table has no sheets
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Get a sheet by exact (case-sensitive) name
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name() == name)
    }

    /// Get a mutable sheet by exact (case-sensitive) name
    pub fn sheet_mut(&mut self, name: &str) -> Option<&mut Sheet> {
        self.sheets.iter_mut().find(|s| s.name() == name)
    }

    /// Iterate over all sheets
    pub fn sheets(&self) -> impl Iterator<Item = &Sheet> {
        self.sheets.iter()
    }

    /// Sheet names in order
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(Sheet::name).collect()
    }

    /// Add a new empty sheet
    pub fn add_sheet(&mut self, name: &str) -> Result<&mut Sheet> {
        self.validate_sheet_name(name)?;
        self.sheets.push(Sheet::new(name));
        let last = self.sheets.len() - 1;
        Ok(&mut self.sheets[last])
    }

    /// Add a sheet built elsewhere (e.g. by a reader)
    pub fn add_existing_sheet(&mut self, sheet: Sheet) -> Result<()> {
        self.validate_sheet_name(sheet.name())?;
        self.sheets.push(sheet);
        Ok(())
    }

    /// Return the sheet named `name`, creating it when missing and `create_if_missing` is set
    pub fn resolve_sheet(&mut self, name: &str, create_if_missing: bool) -> Result<&mut Sheet> {
        match self.sheets.iter().position(|s| s.name() == name) {
            Some(index) => Ok(&mut self.sheets[index]),
            None if create_if_missing => self.add_sheet(name),
            None => Err(Error::SheetNotFound(name.into())),
        }
    }

    /// Validate a name for a new sheet
    fn validate_sheet_name(&self, name: &str) -> Result<()> {
        check_sheet_name(name)?;

        // Names are unique case-insensitively, even though lookup is exact
        let name_lower = name.to_lowercase();
        if self
            .sheets
            .iter()
            .any(|s| s.name().to_lowercase() == name_lower)
        {
            return Err(Error::DuplicateSheetName(name.into()));
        }

        Ok(())
    }
}

/// Check that `name` is usable as a sheet name, ignoring the names already taken
///
/// A name is 1 to [`MAX_SHEET_NAME_LEN`] characters, none of `: \ / ? * [ ]`.
pub fn check_sheet_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
    }
    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return Err(Error::InvalidSheetName(format!(
            "Sheet name too long (max {} characters)",
            MAX_SHEET_NAME_LEN
        )));
    }

    const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];
    if let Some(c) = name.chars().find(|c| INVALID_CHARS.contains(c)) {
        return Err(Error::InvalidSheetName(format!(
            "Sheet name cannot contain '{}'",
            c
        )));
    }

    Ok(())
}
