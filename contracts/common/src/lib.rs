#![no_std]

pub mod ttl;
