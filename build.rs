fn main() {
    println!("cargo:rerun-if-env-changed=SCOREBOARD_CONFIG");

    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
