//! # Command Shell
//!
//! Reads one command per line and writes one JSON response per line.
//!
//! ```text
//! > add idles-bristol
//! {"ok":true,"data":{"outcome":"added","basket":{...}}}
//! > qty idles-bristol 6
//! {"ok":false,"error":{"code":"QUANTITY_LIMIT","message":"maximum quantity is 6"}}
//! ```

use std::io::{self, BufRead, Write};

use gigbook_core::{ContactInfo, Credentials};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::commands::{basket, login, order};
use crate::error::ApiError;
use crate::session::BookingSession;

pub const HELP: &str = "\
catalog                          list concerts
basket                           show basket and totals
add <id>                         book one ticket
qty <id> <n>                     set quantity (0 removes, max 5)
remove <id>                      drop from basket
reset                            empty basket and form
contact <name>|<email>|<card>    fill in the checkout form
checkout                         place the order
login <username>|<password>      check login details
help                             this text
quit                             leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Catalog,
    Basket,
    Add(String),
    Quantity(String, u32),
    Remove(String),
    Reset,
    Contact(ContactInfo),
    Checkout,
    Login(Credentials),
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, ApiError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (name, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match name {
            "catalog" => Command::Catalog,
            "basket" => Command::Basket,
            "add" => Command::Add(required_arg(rest, "add <id>")?),
            "remove" => Command::Remove(required_arg(rest, "remove <id>")?),
            "qty" => {
                let (id, quantity) = rest
                    .split_once(' ')
                    .ok_or_else(|| usage("qty <id> <n>"))?;
                let quantity = quantity.trim().parse().map_err(|_| {
                    ApiError::validation(format!("'{}' is not a whole number", quantity.trim()))
                })?;
                Command::Quantity(id.to_string(), quantity)
            }
            "reset" => Command::Reset,
            "contact" => {
                let fields: Vec<&str> = rest.split('|').collect();
                match fields.as_slice() {
                    [name, email, card] => Command::Contact(ContactInfo::new(*name, *email, *card)),
                    _ => return Err(usage("contact <name>|<email>|<card>")),
                }
            }
            "checkout" => Command::Checkout,
            "login" => {
                let (username, password) = rest
                    .split_once('|')
                    .ok_or_else(|| usage("login <username>|<password>"))?;
                Command::Login(Credentials::new(username, password))
            }
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => {
                return Err(ApiError::validation(format!(
                    "unknown command '{}', try 'help'",
                    other
                )))
            }
        };

        Ok(Some(command))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Catalog => "catalog",
            Command::Basket => "basket",
            Command::Add(_) => "add",
            Command::Quantity(..) => "qty",
            Command::Remove(_) => "remove",
            Command::Reset => "reset",
            Command::Contact(_) => "contact",
            Command::Checkout => "checkout",
            Command::Login(_) => "login",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }
}

fn required_arg(rest: &str, form: &str) -> Result<String, ApiError> {
    if rest.is_empty() {
        return Err(usage(form));
    }
    Ok(rest.to_string())
}

fn usage(form: &str) -> ApiError {
    ApiError::validation(format!("usage: {}", form))
}

fn to_value<T: Serialize>(response: T) -> Result<Value, ApiError> {
    serde_json::to_value(response).map_err(|e| ApiError::internal(e.to_string()))
}

/// Runs a parsed command against the session.
pub fn execute(session: &mut BookingSession, command: Command) -> Result<Value, ApiError> {
    match command {
        Command::Catalog => to_value(basket::list_catalog(session)),
        Command::Basket => to_value(basket::get_basket(session)),
        Command::Add(id) => to_value(basket::add_to_basket(session, &id)),
        Command::Quantity(id, n) => to_value(basket::update_basket_quantity(session, &id, n)?),
        Command::Remove(id) => to_value(basket::remove_from_basket(session, &id)),
        Command::Reset => to_value(basket::reset_basket(session)),
        Command::Contact(contact) => to_value(order::set_contact(session, contact)),
        Command::Checkout => to_value(order::checkout(session)?),
        Command::Login(credentials) => to_value(login::login(&credentials)?),
        Command::Help => Ok(json!({ "help": HELP })),
        Command::Quit => Ok(json!({ "bye": true })),
    }
}

fn envelope(result: Result<Value, ApiError>) -> Value {
    match result {
        Ok(data) => json!({ "ok": true, "data": data }),
        Err(error) => json!({ "ok": false, "error": error }),
    }
}

/// Reads commands from `input` until EOF or `quit`.
pub fn run_shell<R, W>(session: &mut BookingSession, input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(output, "{}", envelope(Err(err)))?;
                continue;
            }
        };
        debug!(command = command.name(), "dispatching");

        let quit = command == Command::Quit;
        writeln!(output, "{}", envelope(execute(session, command)))?;
        output.flush()?;

        if quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::test_session;
    use std::io::Cursor;

    fn run(script: &str) -> Vec<Value> {
        let mut session = test_session();
        let mut out = Vec::new();
        run_shell(&mut session, Cursor::new(script), &mut out).unwrap();

        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("  ").unwrap(), None);
        assert_eq!(
            Command::parse("add idles-bristol").unwrap(),
            Some(Command::Add("idles-bristol".to_string()))
        );
        assert_eq!(
            Command::parse("qty idles-bristol 3").unwrap(),
            Some(Command::Quantity("idles-bristol".to_string(), 3))
        );
        assert_eq!(
            Command::parse("contact Ada L|ada@x.com|4111111111111111").unwrap(),
            Some(Command::Contact(ContactInfo::new(
                "Ada L",
                "ada@x.com",
                "4111111111111111"
            )))
        );
        assert_eq!(
            Command::parse("login ada|pass word1").unwrap(),
            Some(Command::Login(Credentials::new("ada", "pass word1")))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse("add").is_err());
        assert!(Command::parse("qty idles-bristol").is_err());
        assert!(Command::parse("qty idles-bristol -1").is_err());
        assert!(Command::parse("contact a|b").is_err());
        assert!(Command::parse("login nopipe").is_err());
        assert!(Command::parse("dance").is_err());
    }

    #[test]
    fn test_booking_script() {
        let responses = run("\
add idles-bristol
add idles-bristol
qty idles-bristol 6
qty idles-bristol 4
contact Ada Lovelace|ada@example.com|4111111111111111
checkout
basket
");
        assert_eq!(responses.len(), 7);
        assert_eq!(responses[0]["data"]["outcome"], "added");
        assert_eq!(responses[1]["data"]["outcome"], "already_in_basket");
        assert_eq!(responses[2]["ok"], false);
        assert_eq!(responses[2]["error"]["code"], "QUANTITY_LIMIT");
        assert_eq!(responses[3]["data"]["basket"]["totals"]["totalQuantity"], 4);

        let totals = &responses[5]["data"]["summary"]["totals"];
        assert_eq!(totals["subtotal"], 13000);
        assert_eq!(totals["surcharge"], 1200);
        assert_eq!(totals["total"], 14200);

        assert_eq!(responses[6]["data"]["totals"]["entryCount"], 0);
    }

    #[test]
    fn test_quit_stops_reading() {
        let responses = run("help\nquit\ncatalog\n");
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[1]["data"]["bye"], true);
    }

    #[test]
    fn test_login_script() {
        let responses = run("login ada@home|abcdefg1\nlogin ada@home|abcdef1\n");
        assert_eq!(responses[0]["data"]["submitted"], true);
        assert_eq!(responses[1]["ok"], false);
        assert_eq!(responses[1]["error"]["code"], "LOGIN_REJECTED");
        assert_eq!(
            responses[1]["error"]["message"],
            "password must be at least 8 characters"
        );
    }
}
