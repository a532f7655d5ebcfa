pub mod checkup_controller;
