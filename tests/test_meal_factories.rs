// 公開APIを通した献立ファクトリーのテスト
use meal_factory::{
    Describe, Diet, Locale, MainCourse, MealError, MealFactory, MeatDietFactory, Soup,
    VeggieDietFactory,
};

fn describe_meal<F: MealFactory>() -> (&'static str, &'static str) {
    (
        F::create_soup().description(),
        F::create_main_course().description(),
    )
}

#[test]
fn test_factories_through_generic_caller() {
    assert_eq!(describe_meal::<MeatDietFactory>(), ("Borscht", "Cutlet"));
    assert_eq!(
        describe_meal::<VeggieDietFactory>(),
        ("PumpkinSoup", "FriedPotatoes")
    );
}

#[test]
fn test_every_diet_produces_distinct_meal() {
    let meat = Diet::Meat.meal();
    let veggie = Diet::Veggie.meal();

    assert_ne!(meat.soup, veggie.soup);
    assert_ne!(meat.main_course, veggie.main_course);
}

#[test]
fn test_every_product_is_reachable_from_some_diet() {
    for soup in Soup::ALL {
        assert!(Diet::ALL.iter().any(|diet| diet.create_soup() == soup));
    }
    for course in MainCourse::ALL {
        assert!(Diet::ALL.iter().any(|diet| diet.create_main_course() == course));
    }
}

#[test]
fn test_localized_meal_for_parsed_selectors() {
    let diet: Diet = "veggie".parse().unwrap();
    let locale: Locale = "ru".parse().unwrap();

    assert_eq!(
        diet.meal().descriptions(locale),
        ("Тыквенный суп", "FriedPotatoes")
    );
}

#[test]
fn test_parse_errors_surface_input() {
    let error = "pescatarian".parse::<Diet>().unwrap_err();
    assert_eq!(error, MealError::unknown_diet("pescatarian"));
    assert_eq!(error.input(), "pescatarian");
}
