mod coercion_error_sink_tests;
mod property_tests;
