use physical_quantity::unit;
use physical_quantity::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Unit Conversion ===\n");

    let s = "-".repeat(50);

    println!("Parsing and converting");
    println!("{}", s);
    let parsed: unit::AngularAcceleration = "deg/s^2".parse()?;
    let spin_up = AngularAccelerationMagnitude::new(90.0, parsed);
    println!("{} = {}", spin_up.print_in(parsed), spin_up);
    println!("as JSON: {}", spin_up.json_in(unit::AngularAcceleration::RevolutionPerSquareMinute));

    println!("\n");

    println!("Temperatures");
    println!("{}", s);
    let outside = Temperature::new(68.0, unit::Temperature::Fahrenheit);
    let inside = Temperature::new(22.0, unit::Temperature::Celsius);
    let difference = inside - outside;
    println!(
        "{} - {} = {}",
        inside.print_in(unit::Temperature::Celsius),
        outside.print_in(unit::Temperature::Fahrenheit),
        difference.print_in(unit::TemperatureDifference::Celsius)
    );

    println!("\n");

    println!("Derived quantities");
    println!("{}", s);
    let mass = Mass::new(150.0, unit::Mass::Pound);
    let gravity = ScalarAcceleration::new(1.0, unit::Acceleration::StandardGravity);
    let weight = mass * gravity;
    println!("weight of {}: {}", mass.print_in(unit::Mass::Pound), weight.print_in(unit::Force::Pound));
    let climb = weight * Length::new(3.0, unit::Length::Metre);
    let power = climb / Time::new(2.0, unit::Time::Second);
    println!("climbing 3 m in 2 s takes {}", power.print_with(unit::Power::Horsepower, Precision::Single));

    println!("\n");

    println!("Consistent units");
    println!("{}", s);
    for system in UnitSystem::ALL {
        let pressure: unit::Pressure = system.consistent_unit()?;
        println!("{:>12}: pressure in {}", system.abbreviation(), pressure);
    }

    println!("\n");

    println!("Relations");
    println!("{}", s);
    for relation in RELATIONS.iter().filter(|r| r.result == "Energy") {
        println!("{relation}");
    }

    Ok(())
}
