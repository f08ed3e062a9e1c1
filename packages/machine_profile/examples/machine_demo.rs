//! Assembles the reference machine and exercises each of its behaviors and storage slots.

use machine_profile::catalog;

fn main() -> Result<(), machine_profile::Error> {
    let mut machine = catalog::reference_machine()?;

    println!("{}", machine.calculate());
    println!("{}", machine.render());
    println!("{}", machine.display());

    println!("{}", machine.read());
    machine.write("Test!");
    println!("{}", machine.read());

    println!("{}", machine.read_memory());
    machine.write_memory("Test 2!");
    println!("{}", machine.read_memory());

    Ok(())
}
