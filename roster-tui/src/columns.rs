//! Column schema for the roster grid.

use gridmodel::{CellValue, ColumnDef};

use crate::data::Person;

/// The four visible columns. The guid stays in the data but is not shown,
/// so it never participates in filtering or sorting.
pub fn columns() -> Vec<ColumnDef<Person>> {
    vec![
        ColumnDef::new("name", "Name", |p: &Person| CellValue::text(p.name.clone())),
        ColumnDef::new("gender", "Gender", |p: &Person| {
            CellValue::text(p.gender.clone())
        }),
        ColumnDef::new("age", "Age", |p: &Person| CellValue::Int(p.age)),
        ColumnDef::new("email", "Email", |p: &Person| {
            CellValue::text(p.email.clone())
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_people;

    #[test]
    fn schema_matches_the_dataset() {
        let people = load_people();
        let columns = columns();
        assert_eq!(columns.len(), 4);

        let person = &people[0];
        assert_eq!(columns[0].value(person).render(), person.name);
        assert_eq!(columns[2].value(person), CellValue::Int(person.age));
    }
}
