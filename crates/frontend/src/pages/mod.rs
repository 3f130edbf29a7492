pub mod park;
