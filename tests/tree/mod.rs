mod tests_children_cache;
mod tests_mutation_guard;
mod tests_roles;
mod tests_scope_bridge;
mod tests_visitor_dispatch;
