//! Interactive [`Session`] driving a booking form from a [`Terminal`].

use std::{
    fmt,
    io::{self, BufRead, Write},
    str::FromStr,
};

use common::{format_currency, operations::Post};
use derive_more::{Display, Error};
use itertools::Itertools as _;
use service::{
    command::{
        submit::Outcome, CurrencyBlur, CurrencyFocus, CurrencyInput,
        FieldInput, LandInput, Load, PaymentBlur, PaymentFocus, PaymentInput,
        Submit,
    },
    domain::{
        field::{Binding, CALCULATED_RULE},
        payment::Capping,
        Field,
    },
    infra::{
        transport::{self, Reply, Submission},
        Transport,
    },
    query::CurrentState,
    read::Snapshot,
    Command as _, Controller, Query as _,
};
use tracerr::Traced;
use tracing as log;

use crate::Terminal;

/// Help on the lines a [`Session`] understands.
const HELP: &str = "\
<field>=<value>  type a value into a form field
:focus <field>   focus a currency field
:blur <field>    leave a currency field
:pay <value>     type a payment amount (edit form only)
:pay-focus       focus the payment amount
:pay-blur        leave the payment amount
:submit          submit the form
:show            show the current form state
:rules           show the field rules
:help            show this help
:quit            leave without submitting";

/// [`Controller`] of a booking form rendered on a [`Terminal`].
pub type Session<T, R, W> = Controller<T, Terminal<R, W>>;

/// Way a [`Session`] ended.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Ending {
    /// Booking was saved and the user navigated to the provided URL.
    Navigated(String),

    /// User quit.
    Quit,

    /// Input is over.
    Eof,
}

/// Runs the provided [`Session`] until the booking is saved or the user
/// leaves.
///
/// # Errors
///
/// If the [`Terminal`] input cannot be read.
pub async fn run<T, R, W>(session: &Session<T, R, W>) -> io::Result<Ending>
where
    T: Transport<
        Post<Submission>,
        Ok = Reply,
        Err = Traced<transport::Error>,
    >,
    R: BufRead,
    W: Write,
{
    let term = session.view();

    session.execute(Load).await.unwrap_or_else(|e| match e {});
    term.say("Type `:help` to list the commands.");

    loop {
        if let Some(url) = term.navigated() {
            return Ok(Ending::Navigated(url));
        }

        let Some(text) = term.read_line("> ")? else {
            return Ok(Ending::Eof);
        };
        match text.parse::<Line>() {
            Ok(Line::Quit) => return Ok(Ending::Quit),
            Ok(line) => dispatch(session, line).await,
            Err(e) => term.say(format_args!("{e}, see `:help`")),
        }
    }
}

/// Executes the [`Command`] the provided [`Line`] stands for.
///
/// [`Command`]: service::Command
async fn dispatch<T, R, W>(session: &Session<T, R, W>, line: Line)
where
    T: Transport<
        Post<Submission>,
        Ok = Reply,
        Err = Traced<transport::Error>,
    >,
    R: BufRead,
    W: Write,
{
    let term = session.view();

    match line {
        Line::Input { field, value } => match field.binding() {
            Binding::Land => session
                .execute(LandInput { value })
                .await
                .unwrap_or_else(|e| match e {}),
            Binding::Currency(field) => {
                let caret = Some(value.chars().count());
                session
                    .execute(CurrencyInput {
                        field,
                        value,
                        caret,
                    })
                    .await
                    .unwrap_or_else(|e| match e {});
            }
            Binding::Plain => {
                if let Err(e) =
                    session.execute(FieldInput { field, value }).await
                {
                    fail(term, &e);
                }
            }
        },
        Line::Focus(field) => match field.binding() {
            Binding::Currency(field) => session
                .execute(CurrencyFocus { field })
                .await
                .unwrap_or_else(|e| match e {}),
            Binding::Land | Binding::Plain => not_currency(term, field),
        },
        Line::Blur(field) => match field.binding() {
            Binding::Currency(field) => session
                .execute(CurrencyBlur { field })
                .await
                .unwrap_or_else(|e| match e {}),
            Binding::Land | Binding::Plain => not_currency(term, field),
        },
        Line::Pay(value) => {
            let caret = Some(value.chars().count());
            if let Err(e) =
                session.execute(PaymentInput { value, caret }).await
            {
                fail(term, &e);
            }
        }
        Line::PayFocus => {
            if let Err(e) = session.execute(PaymentFocus).await {
                fail(term, &e);
            }
        }
        Line::PayBlur => match session.execute(PaymentBlur).await {
            Ok(Capping::Within) => {}
            Ok(Capping::CappedToBalance) => {
                term.say("Payment amount set to the balance.");
            }
            Ok(Capping::Cleared) => term.say("Payment amount cleared."),
            Err(e) => fail(term, &e),
        },
        Line::Submit => match session.execute(Submit).await {
            Ok(Outcome::InFlight) => {
                term.say("Submission is already in flight.");
            }
            Ok(Outcome::Invalid(_)) => term.say("Form is not valid yet."),
            Ok(Outcome::Rejected(_)) => term.say("Booking was rejected."),
            Ok(Outcome::Saved { s_no, .. }) => match s_no {
                Some(s_no) => term.say(format_args!("Booking #{s_no} saved.")),
                None => term.say("Booking saved."),
            },
            Err(e) => fail(term, &e),
        },
        Line::Show => {
            let snapshot = session
                .execute(CurrentState)
                .await
                .unwrap_or_else(|e| match e {});
            term.say(Show(&snapshot));
        }
        Line::Rules => {
            for field in Field::ALL {
                if let Some(rule) = field.rule() {
                    term.say(format_args!("{field}: {rule}"));
                }
            }
            term.say(CALCULATED_RULE);
        }
        Line::Help => term.say(HELP),
        Line::Empty | Line::Quit => {}
    }
}

/// Reports the provided [`Command`] error to the user.
///
/// [`Command`]: service::Command
fn fail<R, W: Write>(term: &Terminal<R, W>, err: &impl fmt::Display) {
    log::warn!("command failed: {err}");
    term.say(format_args!("error: {err}"));
}

/// Tells the user the provided [`Field`] has no focus handling.
fn not_currency<R, W: Write>(term: &Terminal<R, W>, field: Field) {
    term.say(format_args!("`{field}` is not a currency field"));
}

/// [`Snapshot`] rendered for a [`Terminal`].
struct Show<'a>(&'a Snapshot);

impl fmt::Display for Show<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Snapshot {
            variant,
            values,
            totals,
            validation,
            payment,
            in_flight,
        } = self.0;

        let kind = if variant.is_new() { "new" } else { "edit" };
        writeln!(f, "{kind} booking:")?;
        for (field, value) in values {
            writeln!(f, "  {field} = {value}")?;
        }
        writeln!(
            f,
            "  total_sale_price: {}",
            format_currency(totals.total_sale_price),
        )?;
        writeln!(
            f,
            "  balance_amount: {}",
            format_currency(totals.balance_amount),
        )?;
        writeln!(
            f,
            "  balance_plan: {}",
            format_currency(totals.balance_plan),
        )?;
        if let Some(payment) = payment {
            writeln!(f, "  payment amount = {payment}")?;
        }
        if *in_flight {
            writeln!(f, "  submission in flight")?;
        }
        if validation.is_ok() {
            write!(f, "  valid")
        } else {
            write!(f, "  errors: {}", validation.iter().join("; "))
        }
    }
}

/// Line typed by the user into a [`Session`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Line {
    /// New text of a [`Field`].
    Input {
        /// [`Field`] being typed into.
        field: Field,

        /// New text of the [`Field`].
        value: String,
    },

    /// Focusing of a [`Field`].
    Focus(Field),

    /// Leaving of a [`Field`].
    Blur(Field),

    /// New text of the payment amount.
    Pay(String),

    /// Focusing of the payment amount.
    PayFocus,

    /// Leaving of the payment amount.
    PayBlur,

    /// Submission of the form.
    Submit,

    /// Request of the current form state.
    Show,

    /// Request of the field rules.
    Rules,

    /// Request of the help.
    Help,

    /// Leaving the [`Session`].
    Quit,

    /// Blank line.
    Empty,
}

impl FromStr for Line {
    type Err = ParseLineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::Empty);
        }

        if let Some(cmd) = s.strip_prefix(':') {
            let (name, arg) = cmd
                .split_once(char::is_whitespace)
                .map_or((cmd, ""), |(n, a)| (n, a.trim()));
            return Ok(match name {
                "focus" => Self::Focus(field(arg)?),
                "blur" => Self::Blur(field(arg)?),
                "pay" => Self::Pay(arg.to_owned()),
                "pay-focus" => Self::PayFocus,
                "pay-blur" => Self::PayBlur,
                "submit" => Self::Submit,
                "show" => Self::Show,
                "rules" => Self::Rules,
                "help" => Self::Help,
                "quit" | "q" => Self::Quit,
                _ => {
                    return Err(ParseLineError::UnknownCommand(name.to_owned()))
                }
            });
        }

        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| ParseLineError::NotAssignment(s.to_owned()))?;
        Ok(Self::Input {
            field: field(name.trim())?,
            value: value.trim().to_owned(),
        })
    }
}

/// Parses the provided [`Field`] name.
fn field(name: &str) -> Result<Field, ParseLineError> {
    if name.is_empty() {
        return Err(ParseLineError::MissingField);
    }
    name.parse()
        .map_err(|_| ParseLineError::UnknownField(name.to_owned()))
}

/// Error of parsing a [`Line`].
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum ParseLineError {
    /// Command is not known.
    #[display("unknown command `:{_0}`")]
    UnknownCommand(#[error(not(source))] String),

    /// [`Field`] is not known.
    #[display("unknown field `{_0}`")]
    UnknownField(#[error(not(source))] String),

    /// [`Field`] name is missing.
    #[display("field name is missing")]
    MissingField,

    /// Line is neither a command nor a `<field>=<value>` assignment.
    #[display("`{_0}` is not a `<field>=<value>` assignment")]
    NotAssignment(#[error(not(source))] String),
}

#[cfg(test)]
mod spec {
    use std::{cell::RefCell, io::Cursor};

    use common::operations::Post;
    use service::{
        domain::{Field, Page},
        infra::transport::{self, Reply, Submission},
        Command as _, Config, Controller,
    };
    use tracerr::Traced;

    use crate::Terminal;

    use super::{run, Ending, Line, ParseLineError};

    #[test]
    fn parses_assignments() {
        assert_eq!(
            "buyer_name = Ravi Kumar ".parse::<Line>(),
            Ok(Line::Input {
                field: Field::BuyerName,
                value: "Ravi Kumar".to_owned(),
            }),
        );
        assert_eq!(
            "notes=".parse::<Line>(),
            Ok(Line::Input {
                field: Field::Notes,
                value: String::new(),
            }),
        );
        assert_eq!("  ".parse::<Line>(), Ok(Line::Empty));
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            ":focus base_sqft_price".parse::<Line>(),
            Ok(Line::Focus(Field::BaseSqftPrice)),
        );
        assert_eq!(
            ":pay 1,000".parse::<Line>(),
            Ok(Line::Pay("1,000".to_owned())),
        );
        assert_eq!(":pay-blur".parse::<Line>(), Ok(Line::PayBlur));
        assert_eq!(":q".parse::<Line>(), Ok(Line::Quit));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            ":jump".parse::<Line>(),
            Err(ParseLineError::UnknownCommand("jump".to_owned())),
        );
        assert_eq!(
            "price=1".parse::<Line>(),
            Err(ParseLineError::UnknownField("price".to_owned())),
        );
        assert_eq!(":blur".parse::<Line>(), Err(ParseLineError::MissingField));
        assert_eq!(
            "hello".parse::<Line>(),
            Err(ParseLineError::NotAssignment("hello".to_owned())),
        );
    }

    /// Transport saving every booking under the same serial number.
    #[derive(Debug, Default)]
    struct Server(RefCell<Vec<Submission>>);

    impl service::infra::Transport<Post<Submission>> for Server {
        type Ok = Reply;
        type Err = Traced<transport::Error>;

        async fn execute(
            &self,
            Post(submission): Post<Submission>,
        ) -> Result<Self::Ok, Self::Err> {
            self.0.borrow_mut().push(submission);
            Ok(Reply {
                ok: true,
                errors: None,
                s_no: Some("17".to_owned()),
            })
        }
    }

    type TestSession = Controller<Server, Terminal<Cursor<Vec<u8>>, Vec<u8>>>;

    fn session(page: &str, input: &str) -> TestSession {
        let page = serde_json::from_str::<Page>(page).unwrap();
        let term = Terminal::new(
            Cursor::new(input.as_bytes().to_vec()),
            vec![],
            page.variant(),
        );
        Controller::new(Config::default(), page, Server::default(), term)
    }

    #[tokio::test]
    async fn saves_typed_booking() {
        let session = session(
            r#"{"form": "new", "path": "/crm/new"}"#,
            "booking_date=2024-05-01\n\
             project=Arcadia\n\
             spg_praneeth=SPG\n\
             type_of_sale=otp\n\
             buyer_name=Ravi Kumar\n\
             land_sqyards=100\n\
             base_sqft_price=5000\n\
             :show\n\
             :submit\n\
             :show\n",
        );

        let ending = run(&session).await.unwrap();

        assert_eq!(
            ending,
            Ending::Navigated("/crm/new?saved=1&s_no=17".to_owned()),
        );
        assert_eq!(session.transport().0.borrow().len(), 1);
        assert_eq!(session.value(Field::SbuaSqft), "1350");
    }

    #[tokio::test]
    async fn asks_before_capping_payment() {
        let session = session(
            r#"{
                "form": "edit",
                "path": "/crm/edit/3",
                "fields": {"land_sqyards": "100", "base_sqft_price": "1000"}
            }"#,
            ":pay 99,99,999\n:pay-blur\ny\n:quit\n",
        );

        let ending = run(&session).await.unwrap();
        assert_eq!(ending, Ending::Quit);

        let snapshot = session
            .execute(service::query::CurrentState)
            .await
            .unwrap();
        assert_eq!(snapshot.payment.as_deref(), Some("₹13,50,000.00"));
    }

    #[tokio::test]
    async fn reports_errors_and_goes_on() {
        let session = session(
            r#"{"form": "new", "path": "/crm/new"}"#,
            ":pay 10\n:blur notes\nprice=1\n:submit\n",
        );

        let ending = run(&session).await.unwrap();
        assert_eq!(ending, Ending::Eof);
        assert!(session.transport().0.borrow().is_empty());
        assert!(!session.is_submitting());
    }
}
