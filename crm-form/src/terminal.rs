//! [`Terminal`] rendering of a booking form.

use std::{
    cell::RefCell,
    fmt,
    io::{self, BufRead, Write},
};

use service::{
    domain::{Field, Variant},
    infra::{
        view::{CaretError, Node, Target},
        View,
    },
};

/// [`View`] printing every change of a booking form as a line of text, and
/// reading the user answers from the same input the commands come from.
#[derive(Debug)]
pub struct Terminal<R, W> {
    /// Input the user types into.
    input: RefCell<R>,

    /// Output the changes are printed to.
    output: RefCell<W>,

    /// [`Variant`] of the rendered form.
    variant: Variant,

    /// URL the user was navigated to, ending the session.
    navigated: RefCell<Option<String>>,
}

impl<R, W> Terminal<R, W> {
    /// Creates a new [`Terminal`] rendering a form of the provided
    /// [`Variant`].
    pub fn new(input: R, output: W, variant: Variant) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
            variant,
            navigated: RefCell::new(None),
        }
    }

    /// Returns the URL the user was navigated to, if any.
    #[must_use]
    pub fn navigated(&self) -> Option<String> {
        self.navigated.borrow().clone()
    }

    /// Consumes this [`Terminal`] returning its output.
    pub fn into_output(self) -> W {
        self.output.into_inner()
    }
}

impl<R, W: Write> Terminal<R, W> {
    /// Prints the provided message on its own line.
    pub fn say(&self, msg: impl fmt::Display) {
        _ = writeln!(self.output.borrow_mut(), "{msg}");
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Prints the provided `prompt` and reads a line the user typed.
    ///
    /// [`None`] means the input is over.
    ///
    /// # Errors
    ///
    /// If the input cannot be read.
    pub fn read_line(&self, prompt: &str) -> io::Result<Option<String>> {
        {
            let mut out = self.output.borrow_mut();
            write!(out, "{prompt}")?;
            out.flush()?;
        }

        let mut line = String::new();
        if self.input.borrow_mut().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }
}

impl<R: BufRead, W: Write> View for Terminal<R, W> {
    fn set_value(&self, target: Target, value: &str) {
        self.say(format_args!("  {target} = {value}"));
    }

    fn set_text(&self, node: Node<'_>, text: &str) {
        self.say(format_args!("  #{}: {text}", node.id(self.variant)));
    }

    fn show_errors(&self, errors: &[String]) {
        if errors.is_empty() {
            self.say("  no errors");
        }
        for e in errors {
            self.say(format_args!("  ! {e}"));
        }
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.say(if enabled {
            "  [submit enabled]"
        } else {
            "  [submit disabled]"
        });
    }

    fn set_previous(&self, field: Field, label: Option<&str>) {
        if let Some(label) = label {
            self.say(format_args!("  {field}: {label}"));
        }
    }

    fn restore_caret(
        &self,
        _: Target,
        caret: usize,
    ) -> Result<(), CaretError> {
        // No caret on a line-oriented terminal.
        Err(CaretError(caret))
    }

    fn focus(&self, target: Target, select: bool) {
        if select {
            self.say(format_args!("  focus: {target} (selected)"));
        } else {
            self.say(format_args!("  focus: {target}"));
        }
    }

    fn confirm(&self, question: &str) -> bool {
        match self.read_line(&format!("{question} [y/N] ")) {
            Ok(Some(answer)) => {
                matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
            }
            Ok(None) | Err(_) => false,
        }
    }

    fn navigate(&self, url: &str) {
        self.say(format_args!("  navigating to {url}"));
        *self.navigated.borrow_mut() = Some(url.to_owned());
    }
}

#[cfg(test)]
mod spec {
    use std::io::Cursor;

    use common::Amount;
    use service::{
        domain::{Field, Variant},
        infra::{
            view::{Node, Target},
            View as _,
        },
    };

    use super::Terminal;

    fn terminal(
        input: &str,
        variant: Variant,
    ) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        Terminal::new(Cursor::new(input.as_bytes().to_vec()), vec![], variant)
    }

    fn output(term: Terminal<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(term.into_output()).unwrap()
    }

    #[test]
    fn prints_changes() {
        let term = terminal(
            "",
            Variant::Edit {
                payments_total: Amount::ZERO,
            },
        );

        term.set_value(Target::Field(Field::SbuaSqft), "1350");
        term.set_text(Node::BalanceAmount, "₹0.00");
        term.set_previous(Field::Notes, None);
        term.set_previous(Field::BuyerName, Some("Previous: Ravi"));
        term.show_errors(&["buyer_name is required".to_owned()]);

        assert_eq!(
            output(term),
            "  sbua_sqft = 1350\n\
             \x20 #edit_balance_amount: ₹0.00\n\
             \x20 buyer_name: Previous: Ravi\n\
             \x20 ! buyer_name is required\n",
        );
    }

    #[test]
    fn confirms_only_on_yes() {
        let term = terminal("y\nno\n\n", Variant::New);

        assert!(term.confirm("Sure?"));
        assert!(!term.confirm("Sure?"));
        assert!(!term.confirm("Sure?"));
        assert!(!term.confirm("Sure?"));
        assert!(output(term).starts_with("Sure? [y/N] "));
    }

    #[test]
    fn reads_lines_until_eof() {
        let term = terminal("buyer_name=Ravi\r\n", Variant::New);

        assert_eq!(
            term.read_line("> ").unwrap().as_deref(),
            Some("buyer_name=Ravi"),
        );
        assert_eq!(term.read_line("> ").unwrap(), None);
    }

    #[test]
    fn remembers_navigation() {
        let term = terminal("", Variant::New);
        assert_eq!(term.navigated(), None);

        term.navigate("/crm/new?saved=1");

        assert_eq!(term.navigated().as_deref(), Some("/crm/new?saved=1"));
    }

    #[test]
    fn cannot_place_caret() {
        let term = terminal("", Variant::New);

        assert!(term.restore_caret(Target::PaymentAmount, 3).is_err());
    }
}
