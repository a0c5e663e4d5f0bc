pub mod lookup_controller;
