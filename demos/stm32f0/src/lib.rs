pub mod tri_led;
