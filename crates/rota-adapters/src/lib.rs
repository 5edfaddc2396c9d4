pub mod opsgenie;
