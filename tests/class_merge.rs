use figures::merge_classes;

#[test]
fn concatenates_class_names() {
    assert_eq!(merge_classes(["class1", "class2"]), "class1 class2");
    assert_eq!(merge_classes(["class1", "class2", "class3"]), "class1 class2 class3");
}

#[test]
fn empty_class_names() {
    assert_eq!(merge_classes([""]), "");
    assert_eq!(merge_classes(["", ""]), "");
}

#[test]
fn resolves_conflicts_in_favor_of_later_classes() {
    assert_eq!(
        merge_classes(["px-2 py-1 bg-red-500 hover:bg-dark-red", "p-3 bg-[#B91C1C]"]),
        "hover:bg-dark-red p-3 bg-[#B91C1C]"
    );
    assert_eq!(merge_classes(["rounded-t-lg", "rounded-none"]), "rounded-none");
    assert_eq!(merge_classes(["inset-x-0", "left-4"]), "inset-x-0 left-4");
}

#[test]
fn non_conflicting_classes_are_retained() {
    assert_eq!(
        merge_classes(["flex items-center", "gap-2 text-sm font-medium"]),
        "flex items-center gap-2 text-sm font-medium"
    );
}

#[test]
fn responsive_variants_are_independent() {
    assert_eq!(
        merge_classes(["w-full md:w-1/2", "md:w-1/3"]),
        "w-full md:w-1/3"
    );
}

#[test]
fn spacing_and_divide_utilities_conflict() {
    assert_eq!(merge_classes(["space-x-2", "space-x-4"]), "space-x-4");
    assert_eq!(merge_classes(["divide-y-2", "divide-y-4"]), "divide-y-4");
}
