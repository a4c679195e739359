pub mod bed;
pub mod motion;
pub mod population;
