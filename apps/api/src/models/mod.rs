pub mod wordhunt;
