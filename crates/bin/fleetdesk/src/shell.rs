//! Interactive shell — collects operator input, invokes one desk operation
//! per command, and renders the outcome as report text.
//!
//! The shell is the replacement for the modal-prompt GUI: one command per
//! line instead of one dialog per field. Identifier fields are parsed (and
//! rejected with a user-visible error) before any desk operation runs.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use fleetdesk_app::services::rental_desk::RentalDesk;
use fleetdesk_domain::customer::Customer;
use fleetdesk_domain::error::FleetError;
use fleetdesk_domain::id::{CustomerId, VehicleId};
use fleetdesk_domain::vehicle::Vehicle;

/// One operator action, parsed from a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddVehicle {
        id: VehicleId,
        brand: String,
        model: String,
    },
    AddCustomer {
        id: CustomerId,
        name: String,
        license_number: String,
    },
    Rent {
        vehicle_id: VehicleId,
        customer_id: CustomerId,
    },
    Return {
        vehicle_id: VehicleId,
    },
    ListAvailable,
    ListVehicles,
    ListCustomers,
    Help,
    Quit,
}

/// Input errors reported before any desk operation is attempted.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unknown command `{0}`; type `help` for the list of commands")]
    UnknownCommand(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("{field} must be a number, got `{value}`")]
    InvalidId { field: &'static str, value: String },
}

const HELP: &str = "\
Commands:
  add-vehicle <id> <brand> <model>       add a vehicle to the fleet
  add-customer <id> <name> <license>     add a customer to the roster
  rent <vehicle-id> <customer-id>        check a vehicle out
  return <vehicle-id>                    check a vehicle back in
  available                              list vehicles available for rent
  vehicles                               list the full fleet
  customers                              list the customer roster
  help                                   show this text
  quit                                   exit";

fn parse_id<T>(field: &'static str, value: &str) -> Result<T, ParseError>
where
    T: std::str::FromStr,
{
    value.parse().map_err(|_| ParseError::InvalidId {
        field,
        value: value.to_string(),
    })
}

/// Parse one non-empty line into a [`Command`].
///
/// Multi-word fields are supported where they make sense: the vehicle model
/// is everything after the brand, and the customer name is everything
/// between the id and the trailing license number.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the bad input; nothing reaches the
/// desk until the line parses.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let (command, args) = words
        .split_first()
        .ok_or_else(|| ParseError::UnknownCommand(String::new()))?;

    match *command {
        "add-vehicle" => match args {
            [id, brand, model @ ..] if !model.is_empty() => Ok(Command::AddVehicle {
                id: parse_id("vehicle id", id)?,
                brand: (*brand).to_string(),
                model: model.join(" "),
            }),
            _ => Err(ParseError::Usage("add-vehicle <id> <brand> <model>")),
        },
        "add-customer" => match args {
            [id, name @ .., license] if !name.is_empty() => Ok(Command::AddCustomer {
                id: parse_id("customer id", id)?,
                name: name.join(" "),
                license_number: (*license).to_string(),
            }),
            _ => Err(ParseError::Usage("add-customer <id> <name> <license>")),
        },
        "rent" => match args {
            [vehicle_id, customer_id] => Ok(Command::Rent {
                vehicle_id: parse_id("vehicle id", vehicle_id)?,
                customer_id: parse_id("customer id", customer_id)?,
            }),
            _ => Err(ParseError::Usage("rent <vehicle-id> <customer-id>")),
        },
        "return" => match args {
            [vehicle_id] => Ok(Command::Return {
                vehicle_id: parse_id("vehicle id", vehicle_id)?,
            }),
            _ => Err(ParseError::Usage("return <vehicle-id>")),
        },
        "available" => Ok(Command::ListAvailable),
        "vehicles" => Ok(Command::ListVehicles),
        "customers" => Ok(Command::ListCustomers),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn render_vehicles(title: &str, vehicles: &[Vehicle]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    if vehicles.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for (position, vehicle) in vehicles.iter().enumerate() {
        let _ = writeln!(out, "  {}. {vehicle}", position + 1);
    }
    let _ = write!(out, "Total: {}", vehicles.len());
    out
}

fn render_customers(customers: &[Customer]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "All customers");
    if customers.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for (position, customer) in customers.iter().enumerate() {
        let _ = writeln!(out, "  {}. {customer}", position + 1);
    }
    let _ = write!(out, "Total: {}", customers.len());
    out
}

/// Execute one command against the desk and render the outcome.
///
/// [`Command::Quit`] is not handled here; the [`run`] loop owns the exit
/// confirmation.
#[must_use]
pub fn execute(desk: &RentalDesk, command: &Command) -> String {
    match command {
        Command::AddVehicle { id, brand, model } => {
            match desk.add_vehicle(*id, brand, model) {
                Ok(()) => format!("Vehicle added: ID: {id} | {brand} {model} | Status: Available"),
                Err(err) => format!("Add failed: {err}"),
            }
        }
        Command::AddCustomer {
            id,
            name,
            license_number,
        } => match desk.add_customer(*id, name, license_number) {
            Ok(()) => format!("Customer added: ID: {id} | Name: {name} | License: {license_number}"),
            Err(err) => format!("Add failed: {err}"),
        },
        Command::Rent {
            vehicle_id,
            customer_id,
        } => match desk.rent(*vehicle_id, *customer_id) {
            Ok(()) => format!("Vehicle {vehicle_id} rented to customer {customer_id}"),
            Err(err @ FleetError::OperationNotPossible) => format!(
                "Rent failed: {err}\n\
                 Possible causes: the vehicle does not exist, is already rented,\n\
                 or the customer does not exist"
            ),
            Err(err) => format!("Rent failed: {err}"),
        },
        Command::Return { vehicle_id } => match desk.return_vehicle(*vehicle_id) {
            Ok(()) => format!("Vehicle {vehicle_id} returned and available for rent"),
            Err(err @ FleetError::OperationNotPossible) => format!(
                "Return failed: {err}\n\
                 Possible causes: the vehicle is not currently rented or does not exist"
            ),
            Err(err) => format!("Return failed: {err}"),
        },
        Command::ListAvailable => {
            render_vehicles("Available vehicles", &desk.available_vehicles())
        }
        Command::ListVehicles => render_vehicles("All vehicles", &desk.all_vehicles()),
        Command::ListCustomers => render_customers(&desk.customers()),
        Command::Help | Command::Quit => HELP.to_string(),
    }
}

/// Run the read-eval-print loop until `quit` is confirmed or input ends.
///
/// # Errors
///
/// Returns any I/O error from the input or output streams.
pub fn run(
    desk: &RentalDesk,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    writeln!(output, "Fleetdesk rental management")?;
    writeln!(output, "Type `help` for the list of commands.")?;

    let mut line = String::new();
    loop {
        write!(output, "fleetdesk> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match parse(trimmed) {
            Ok(Command::Quit) => {
                write!(output, "Really exit? [y/N] ")?;
                output.flush()?;
                let mut answer = String::new();
                if input.read_line(&mut answer)? == 0
                    || answer.trim().eq_ignore_ascii_case("y")
                {
                    writeln!(output, "Goodbye.")?;
                    break;
                }
            }
            Ok(command) => writeln!(output, "{}", execute(desk, &command))?,
            Err(err) => writeln!(output, "{err}")?,
        }
    }
    Ok(())
}
