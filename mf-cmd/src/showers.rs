//! List the shower table.

use mf_core::shower::ShowerTable;

/// Print every shower the picker offers, with its activity window and
/// population index where the table has one.
pub fn run_showers() -> anyhow::Result<()> {
    let table = ShowerTable::embedded();
    for choice in table.choices() {
        match table.find(&choice.code) {
            Some(shower) => println!(
                "{:<48} {} - {}  r={}",
                choice.label, shower.begin, shower.end, shower.r
            ),
            None => println!("{}", choice.label),
        }
    }
    Ok(())
}
