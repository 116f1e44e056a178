//! Module commmun au composant.
//!
//! Contient notamment des fonctions utiles.

pub mod send;
