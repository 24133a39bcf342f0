//! Common source code fixtures for tests.

// Expressions and lists
pub const CALL_WITH_THREE_ARGUMENTS: &str = "class A { void m() { f(x, y, z); } }";
pub const PRODUCT_FIELD: &str = "class A { int v = a * b; }";

// Loops and branches
pub const WHILE_WITH_BODY: &str = "class A { void m() { while (cond) { stmt(); } } }";
pub const IF_ELSE: &str = "class A { void m() { if (ok) { run(); } else { stop(); } } }";

pub const FOREACH_OVER_ITEMS: &str = r#"
class A {
    void m(java.util.List<String> items) {
        for (String x : items) {
            use(x);
        }
    }
}
"#;

pub const RECORD_POINT: &str = "record Point(int x, int y, int z) {}";

pub const PATTERNS_IN_SWITCH: &str = r#"
class A {
    int m(Object o) {
        return switch (o) {
            case Pair(Integer a, _) when a > 0 -> a;
            case Integer _ -> 0;
            default -> -1;
        };
    }
}
"#;

/// A file touching most node kinds, used by traversal tests
pub const KITCHEN_SINK: &str = r#"
package demo.app;

import java.util.List;
import static java.lang.Math.*;

@Deprecated
public final class Sink<T extends Comparable<T>> extends Base implements Runnable, Cloneable {
    private static int counter = 0;
    static { counter = 1; }

    Sink() throws Exception {}

    public <R> R apply(final int[] values, String... rest) {
        int total = 0, last;
        for (int i = 0; i < values.length; i++) {
            total += values[i];
        }
        for (String s : rest) {
            if (s instanceof String t && !t.isEmpty()) {
                continue;
            } else {
                break;
            }
        }
        do { total--; } while (total > 10);
        while (total < 0) total++;
        switch (total) {
            case 1: return null;
            default: ;
        }
        Object o = (Object) new int[total];
        int k = switch (total) {
            case 0 -> { yield 1; }
            default -> total > 1 ? total * 2 : -total;
        };
        if (o == null) throw new IllegalStateException("none");
        return this.apply(values);
    }

    record Pair(int a, int b) {}

    @interface Marker {
        int level() default 1;
    }
}
"#;

pub const DOCUMENTED_CLASS: &str = r#"
/**
 * A documented type.
 */
class Doc {
    /** The count. **/
    int count = 2 /* halved ** later */ / 1;
}
"#;

pub const SWITCH_WITH_CASE_LIST: &str =
    "class A { void m(int k) { switch (k) { case 1, 2, 3: go(); } } }";
