mod test_concurrent_joins;
mod test_reconnect_keeps_stale_binding;
