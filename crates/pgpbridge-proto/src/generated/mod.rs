#![allow(clippy::all)]

pub mod pgpbridge {
    pub mod v1 {
        include!("pgpbridge.v1.rs");
    }
}
