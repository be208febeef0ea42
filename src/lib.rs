//! Flowpay - Payment block runtime options for conversational flows.
//!
//! Given a configured payment block and a conversation session snapshot,
//! this crate resolves stored Stripe credentials, creates a payment intent,
//! and returns the data a chat front-end needs to render a payment widget:
//! the intent's client secret, a publishable key, and a formatted amount
//! label.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
