pub mod deflicker;
