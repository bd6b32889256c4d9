use crate::common::{TestApp, routes};

mod browse {
    use super::*;

    #[tokio::test]
    async fn home_goods_categories_follow_tab_order() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::catalog("home_goods")).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["domain"].as_str().unwrap(), "home_goods");
        let keys: Vec<&str> = res.body["categories"]
            .as_array()
            .unwrap()
            .iter()
            .map(|group| group["key"].as_str().unwrap())
            .collect();
        assert_eq!(keys, vec!["bed", "sofa", "armchair"]);
    }

    #[tokio::test]
    async fn fashion_categories_follow_tab_order() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::catalog("fashion")).await;

        assert_eq!(res.status, 200);
        let keys: Vec<&str> = res.body["categories"]
            .as_array()
            .unwrap()
            .iter()
            .map(|group| group["key"].as_str().unwrap())
            .collect();
        assert_eq!(keys, vec!["mens_shirts", "womens_wear", "shoes"]);
    }

    #[tokio::test]
    async fn category_groups_carry_their_products() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::catalog("fashion")).await;

        let mens = &res.body["categories"][0];
        assert_eq!(mens["category_name"].as_str().unwrap(), "Mens");
        let products = mens["products"].as_array().unwrap();
        assert!(!products.is_empty());
        assert!(products[0]["product_number"].as_str().is_some());
        assert!(products[0]["thumbnail_url"].as_str().is_some());
    }

    #[tokio::test]
    async fn unknown_domain_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::catalog("groceries")).await;

        assert_eq!(res.status, 400);
    }
}

mod detail {
    use super::*;

    #[tokio::test]
    async fn product_detail_includes_ordered_images() {
        let app = TestApp::spawn().await;

        let res = app
            .get(&routes::product("fashion", "mens_shirts", "FA-MS-001"))
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(
            res.body["product_name"].as_str().unwrap(),
            "Coastal Linen Shirt"
        );
        let images = res.body["images"].as_array().unwrap();
        assert_eq!(images.len(), 3);
        assert!(images[0].as_str().unwrap().ends_with("front.jpg"));
    }

    #[tokio::test]
    async fn unknown_product_is_a_not_found_state() {
        let app = TestApp::spawn().await;

        let res = app
            .get(&routes::product("fashion", "mens_shirts", "FA-MS-999"))
            .await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"].as_str().unwrap(), "NOT_FOUND");
    }

    #[tokio::test]
    async fn unknown_category_is_a_not_found_state() {
        let app = TestApp::spawn().await;

        let res = app
            .get(&routes::product("fashion", "hats", "FA-MS-001"))
            .await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"].as_str().unwrap(), "NOT_FOUND");
    }

    #[tokio::test]
    async fn product_numbers_do_not_cross_categories() {
        let app = TestApp::spawn().await;

        // Valid identifier, wrong category: the scan is per-category.
        let res = app
            .get(&routes::product("fashion", "shoes", "FA-MS-001"))
            .await;

        assert_eq!(res.status, 404);
    }
}
