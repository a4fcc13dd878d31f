//! [`Command`] for submitting a booking form.

use common::operations::Post;
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{redirect, validation},
    infra::{
        transport::{self, Reply, Submission},
        Transport, View,
    },
    Controller,
};

use super::Command;

/// Message shown to the user when a submission didn't reach the server or
/// its reply couldn't be understood.
pub const FAILURE_MESSAGE: &str = "Submission failed, please try again";

/// [`Command`] for submitting a booking form.
///
/// The form is validated first, and only posted if there are no errors. Only
/// one submission may be in flight at a time.
#[derive(Clone, Copy, Debug)]
pub struct Submit;

/// Outcome of a [`Submit`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Another submission is in flight, so nothing was posted.
    InFlight,

    /// Form didn't pass the validation, so nothing was posted.
    Invalid(Vec<String>),

    /// Server rejected the booking for the provided reasons.
    Rejected(Vec<String>),

    /// Server saved the booking.
    Saved {
        /// Serial number the server assigned to the booking, if any.
        s_no: Option<String>,

        /// URL the user was navigated to.
        redirect: String,
    },
}

impl<T, V> Command<Submit> for Controller<T, V>
where
    T: Transport<
        Post<Submission>,
        Ok = Reply,
        Err = Traced<transport::Error>,
    >,
    V: View,
{
    type Ok = Outcome;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, _: Submit) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        if self.is_submitting() {
            log::debug!("submission is already in flight");
            return Ok(Outcome::InFlight);
        }

        let (validation, submission) = {
            let state = self.state.borrow();
            (
                validation::validate(&state.form),
                Submission {
                    path: self.endpoint.path.clone(),
                    fields: state.form.pairs(),
                },
            )
        };
        if !validation.is_ok() {
            let errors = validation.into_errors();
            self.view.show_errors(&errors);
            return Ok(Outcome::Invalid(errors));
        }

        let _guard = InFlight::acquire(self);

        log::info!("posting form to `{}`", submission.path);
        let reply = self
            .transport
            .execute(Post(submission))
            .await
            .inspect_err(|e| self.fail(e))
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        log::debug!("server replied: {reply:?}");

        if !reply.ok {
            let errors = reply.rejection();
            log::warn!("booking rejected: {}", errors.join("; "));
            self.view.show_errors(&errors);
            return Ok(Outcome::Rejected(errors));
        }

        let s_no = reply.serial_number().map(ToOwned::to_owned);
        let target = self
            .endpoint
            .success_redirect
            .as_deref()
            .unwrap_or(self.config.success_redirect.as_str());
        let redirect = redirect::success_url(target, s_no.as_deref())
            .inspect_err(|e| self.fail(e))
            .map_err(tracerr::from_and_wrap!(=> E))?;

        log::info!("booking saved, redirecting to `{redirect}`");
        self.view.navigate(&redirect);
        Ok(Outcome::Saved { s_no, redirect })
    }
}

impl<T, V: View> Controller<T, V> {
    /// Puts the form into the failed state after the provided error.
    fn fail(&self, err: &impl std::fmt::Display) {
        log::error!("submission failed: {err}");
        self.view.show_errors(&[FAILURE_MESSAGE.to_owned()]);
    }
}

/// Guard of an in-flight submission.
///
/// Keeps the submit control disabled while alive. Once dropped (whether the
/// submission completed, failed or was cancelled) the control is enabled
/// again, unless a new booking form was left with validation errors.
struct InFlight<'a, T, V: View> {
    /// [`Controller`] performing the submission.
    controller: &'a Controller<T, V>,
}

impl<'a, T, V: View> InFlight<'a, T, V> {
    /// Marks a submission as in flight until the returned guard is dropped.
    fn acquire(controller: &'a Controller<T, V>) -> Self {
        controller.submitting.set(true);
        controller.view.set_submit_enabled(false);
        Self { controller }
    }
}

impl<T, V: View> Drop for InFlight<'_, T, V> {
    fn drop(&mut self) {
        let Self { controller } = self;
        controller.submitting.set(false);

        let enabled = {
            let state = controller.state.borrow();
            !state.form.variant().is_new()
                || validation::validate(&state.form).is_ok()
        };
        controller.view.set_submit_enabled(enabled);
    }
}

/// Error of [`Submit`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Transport`] error.
    #[display("`Transport` operation failed: {_0}")]
    #[from]
    Transport(transport::Error),

    /// Redirect target is not a valid URL.
    #[display("Invalid redirect target: {_0}")]
    #[from]
    Redirect(url::ParseError),
}
