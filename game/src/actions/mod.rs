mod activate_spawner;
mod destroy_host;
mod emit_unit;
mod stop_spawner;
