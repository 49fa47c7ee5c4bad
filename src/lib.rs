//! Registrar - an in-memory student roster.
//!
//! This crate provides the core library for Registrar: student records with
//! validated fields, a roster registry with derived id and course indices,
//! and reporting over it (GPA ranking, aggregate statistics).

pub mod core;
pub mod ops;
pub mod util;

pub use crate::core::{
    error::RosterError, roster::Roster, student::GraduateProfile, student::Student,
    student_id::StudentId,
};

pub use crate::ops::report::{gpa_ranking, statistics, Statistics};
